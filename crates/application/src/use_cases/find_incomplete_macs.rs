use crate::ports::{ArpSource, ReportWriter};
use crate::services::ArpClassifier;
use arp_inspect_domain::{DomainError, IncompleteMacReport};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: scan an ARP capture and persist the incomplete entries
pub struct FindIncompleteMacsUseCase {
    source: Arc<dyn ArpSource>,
    writer: Arc<dyn ReportWriter>,
    classifier: ArpClassifier,
}

impl FindIncompleteMacsUseCase {
    pub fn new(
        source: Arc<dyn ArpSource>,
        writer: Arc<dyn ReportWriter>,
        classifier: ArpClassifier,
    ) -> Self {
        Self {
            source,
            writer,
            classifier,
        }
    }

    pub async fn execute(&self) -> Result<IncompleteMacReport, DomainError> {
        debug!("Reading ARP output");

        let lines = self.source.read_lines().await?;
        debug!(lines = lines.len(), "ARP output read successfully");

        let report = self.classifier.classify(&lines);
        self.writer.write_report(&report).await?;

        if report.is_empty() {
            info!(scanned = report.lines_scanned(), "No incomplete MAC addresses");
        } else {
            info!(
                incomplete = report.count(),
                scanned = report.lines_scanned(),
                "Incomplete MAC addresses found"
            );
        }

        Ok(report)
    }
}
