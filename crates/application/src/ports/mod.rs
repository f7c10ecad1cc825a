mod arp_source;
mod report_writer;

pub use arp_source::ArpSource;
pub use report_writer::ReportWriter;
