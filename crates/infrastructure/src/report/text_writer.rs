use arp_inspect_application::ports::ReportWriter;
use arp_inspect_domain::{DomainError, IncompleteMacReport};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Writes the raw ARP lines of every incomplete entry, one per line.
/// Existing files are truncated; an empty report leaves an empty file.
pub struct TextReportWriter {
    path: PathBuf,
}

impl TextReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn render(report: &IncompleteMacReport) -> String {
        let mut out = String::new();
        for record in report {
            out.push_str(&record.raw);
            out.push('\n');
        }
        out
    }
}

#[async_trait]
impl ReportWriter for TextReportWriter {
    async fn write_report(&self, report: &IncompleteMacReport) -> Result<(), DomainError> {
        fs::write(&self.path, Self::render(report))
            .await
            .map_err(|e| {
                DomainError::ReportWriteError(self.path.display().to_string(), e.to_string())
            })?;

        debug!(path = %self.path.display(), records = report.count(), "Text report written");
        Ok(())
    }
}
