use crate::arp_record::ArpRecord;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// ARP records whose hardware address is unresolved, in input order.
///
/// Built once per scan by the classifier; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncompleteMacReport {
    records: Vec<ArpRecord>,
    lines_scanned: usize,
    lines_skipped: usize,
}

impl IncompleteMacReport {
    pub fn new(records: Vec<ArpRecord>, lines_scanned: usize, lines_skipped: usize) -> Self {
        Self {
            records,
            lines_scanned,
            lines_skipped,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ArpRecord] {
        &self.records
    }

    /// Total number of incomplete entries
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Data lines examined (complete and incomplete)
    pub fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }

    /// Blank, header and short lines ignored during the scan
    pub fn lines_skipped(&self) -> usize {
        self.lines_skipped
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArpRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a IncompleteMacReport {
    type Item = &'a ArpRecord;
    type IntoIter = std::slice::Iter<'a, ArpRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for IncompleteMacReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IncompleteMacReport", 2)?;
        state.serialize_field("count", &self.count())?;
        state.serialize_field("records", &self.records)?;
        state.end()
    }
}
