pub mod arp_file_reader;
pub mod path_resolver;

pub use arp_file_reader::FileArpSource;
pub use path_resolver::{expand_home, list_files, resolve_input_path};
