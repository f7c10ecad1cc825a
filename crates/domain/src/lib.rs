//! arp-inspect domain layer
pub mod arp_record;
pub mod config;
pub mod errors;
pub mod mac_address;
pub mod report;

pub use arp_record::ArpRecord;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use mac_address::MacAddress;
pub use report::IncompleteMacReport;
