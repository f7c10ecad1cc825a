#![allow(dead_code)]

use arp_inspect_application::ports::{ArpSource, ReportWriter};
use arp_inspect_domain::{DomainError, IncompleteMacReport};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockArpSource {
    lines: Arc<Vec<String>>,
    should_fail: bool,
}

impl MockArpSource {
    pub fn new(content: &str) -> Self {
        Self {
            lines: Arc::new(content.lines().map(str::to_string).collect()),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            lines: Arc::new(Vec::new()),
            should_fail: true,
        }
    }
}

#[async_trait]
impl ArpSource for MockArpSource {
    async fn read_lines(&self) -> Result<Vec<String>, DomainError> {
        if self.should_fail {
            return Err(DomainError::IoError("mock read failure".to_string()));
        }
        Ok(self.lines.as_ref().clone())
    }
}

#[derive(Clone, Default)]
pub struct MockReportWriter {
    written: Arc<Mutex<Vec<IncompleteMacReport>>>,
    should_fail: bool,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            written: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    pub fn written(&self) -> Vec<IncompleteMacReport> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportWriter for MockReportWriter {
    async fn write_report(&self, report: &IncompleteMacReport) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::ReportWriteError(
                "mock".to_string(),
                "disk full".to_string(),
            ));
        }
        self.written.lock().unwrap().push(report.clone());
        Ok(())
    }
}
