use arp_inspect_application::ports::ReportWriter;
use arp_inspect_domain::{DomainError, IncompleteMacReport};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportWriter for JsonReportWriter {
    async fn write_report(&self, report: &IncompleteMacReport) -> Result<(), DomainError> {
        let mut body = serde_json::to_string_pretty(report)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;
        body.push('\n');

        fs::write(&self.path, body).await.map_err(|e| {
            DomainError::ReportWriteError(self.path.display().to_string(), e.to_string())
        })?;

        debug!(path = %self.path.display(), records = report.count(), "JSON report written");
        Ok(())
    }
}
