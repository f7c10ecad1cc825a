use arp_inspect_application::services::ArpClassifier;
use arp_inspect_application::use_cases::FindIncompleteMacsUseCase;
use arp_inspect_domain::DomainError;
use std::sync::Arc;

mod helpers;
use helpers::{MockArpSource, MockReportWriter};

const CAPTURE: &str = "\
Protocol  Address          Age (min)  Hardware Addr   Type   Interface
192.168.1.1            0    aabb.ccdd.eeff  ARPA   GigabitEthernet0/1
192.168.1.2            5    INCOMPLETE       ARPA   GigabitEthernet0/2
192.168.1.3           10    1122.3344.5566  ARPA   GigabitEthernet0/3
10.0.0.1              15    INCOMPLETE       ARPA   GigabitEthernet0/4
";

#[tokio::test]
async fn test_execute_classifies_and_writes_report() {
    let writer = MockReportWriter::new();
    let use_case = FindIncompleteMacsUseCase::new(
        Arc::new(MockArpSource::new(CAPTURE)),
        Arc::new(writer.clone()),
        ArpClassifier::default(),
    );

    let report = use_case.execute().await.unwrap();

    assert_eq!(report.count(), 2);
    assert_eq!(report.records()[0].address.as_ref(), "192.168.1.2");
    assert_eq!(report.records()[1].address.as_ref(), "10.0.0.1");

    let written = writer.written();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0], report);
}

#[tokio::test]
async fn test_execute_writes_empty_report() {
    let writer = MockReportWriter::new();
    let use_case = FindIncompleteMacsUseCase::new(
        Arc::new(MockArpSource::new("")),
        Arc::new(writer.clone()),
        ArpClassifier::default(),
    );

    let report = use_case.execute().await.unwrap();

    assert!(report.is_empty());
    assert_eq!(writer.written().len(), 1);
    assert!(writer.written()[0].is_empty());
}

#[tokio::test]
async fn test_execute_propagates_read_error() {
    let writer = MockReportWriter::new();
    let use_case = FindIncompleteMacsUseCase::new(
        Arc::new(MockArpSource::failing()),
        Arc::new(writer.clone()),
        ArpClassifier::default(),
    );

    let result = use_case.execute().await;

    assert!(matches!(result, Err(DomainError::IoError(_))));
    assert!(writer.written().is_empty());
}

#[tokio::test]
async fn test_execute_propagates_write_error() {
    let use_case = FindIncompleteMacsUseCase::new(
        Arc::new(MockArpSource::new(CAPTURE)),
        Arc::new(MockReportWriter::failing()),
        ArpClassifier::default(),
    );

    let result = use_case.execute().await;

    assert!(matches!(result, Err(DomainError::ReportWriteError(_, _))));
}
