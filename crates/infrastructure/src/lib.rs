pub mod report;
pub mod system;
