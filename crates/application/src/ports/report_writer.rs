use arp_inspect_domain::{DomainError, IncompleteMacReport};
use async_trait::async_trait;

#[async_trait]
pub trait ReportWriter: Send + Sync {
    async fn write_report(&self, report: &IncompleteMacReport) -> Result<(), DomainError>;
}
