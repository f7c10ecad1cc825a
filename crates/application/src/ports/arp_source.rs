use arp_inspect_domain::DomainError;
use async_trait::async_trait;

/// Supplies the raw lines of a `show ip arp` capture
#[async_trait]
pub trait ArpSource: Send + Sync {
    async fn read_lines(&self) -> Result<Vec<String>, DomainError>;
}
