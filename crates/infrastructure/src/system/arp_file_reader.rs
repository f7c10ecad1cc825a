use arp_inspect_application::ports::ArpSource;
use arp_inspect_domain::DomainError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, warn};

/// Reads a saved `show ip arp` capture from disk
pub struct FileArpSource {
    path: PathBuf,
}

impl FileArpSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArpSource for FileArpSource {
    async fn read_lines(&self) -> Result<Vec<String>, DomainError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("Error reading file {}: {}", self.path.display(), e))
        })?;

        // Terminal captures occasionally carry stray non-UTF-8 bytes
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), "ARP capture is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        // Notepad prefixes UTF-8 files with a byte-order mark
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        debug!(path = %self.path.display(), lines = lines.len(), "ARP capture loaded");
        Ok(lines)
    }
}
