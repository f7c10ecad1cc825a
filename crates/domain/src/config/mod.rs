pub mod classifier;
pub mod errors;
pub mod logging;
pub mod report;
pub mod root;

pub use classifier::ClassifierConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use report::{ReportConfig, ReportFormat};
pub use root::{CliOverrides, Config};
