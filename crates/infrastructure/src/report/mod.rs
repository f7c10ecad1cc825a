pub mod json_writer;
pub mod text_writer;

pub use json_writer::JsonReportWriter;
pub use text_writer::TextReportWriter;

use arp_inspect_application::ports::ReportWriter;
use arp_inspect_domain::config::ReportFormat;
use std::path::PathBuf;
use std::sync::Arc;

pub fn report_writer_for(format: ReportFormat, path: impl Into<PathBuf>) -> Arc<dyn ReportWriter> {
    match format {
        ReportFormat::Text => Arc::new(TextReportWriter::new(path)),
        ReportFormat::Json => Arc::new(JsonReportWriter::new(path)),
    }
}
