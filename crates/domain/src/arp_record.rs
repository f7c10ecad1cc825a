use serde::Serialize;
use std::sync::Arc;

/// One data line of `show ip arp` output.
///
/// Column layout after the optional `Internet` protocol column:
/// `Address  Age (min)  Hardware Addr  Type  Interface`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArpRecord {
    pub address: Arc<str>,
    pub age: Arc<str>,
    pub mac: Arc<str>,
    #[serde(rename = "type")]
    pub entry_type: Option<Arc<str>>,
    pub interface: Option<Arc<str>>,
    #[serde(skip)]
    pub raw: Arc<str>,
}

impl ArpRecord {
    pub fn new(
        address: Arc<str>,
        age: Arc<str>,
        mac: Arc<str>,
        entry_type: Option<Arc<str>>,
        interface: Option<Arc<str>>,
        raw: Arc<str>,
    ) -> Self {
        Self {
            address,
            age,
            mac,
            entry_type,
            interface,
            raw,
        }
    }
}
