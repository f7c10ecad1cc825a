use arp_inspect_domain::config::ClassifierConfig;
use arp_inspect_domain::{ArpRecord, IncompleteMacReport, MacAddress};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, trace};

/// Leading column of IOS output: `Protocol  Address  Age (min) ...`
const PROTOCOL_COLUMN: &str = "Internet";

/// Address, age and hardware address must be present; type and interface
/// are optional (IOS leaves the interface blank for unresolved entries).
const MIN_COLUMNS: usize = 3;

const ADDRESS_COLUMN: usize = 0;
const AGE_COLUMN: usize = 1;
const MAC_COLUMN: usize = 2;
const TYPE_COLUMN: usize = 3;
const INTERFACE_COLUMN: usize = 4;

/// Outcome of classifying a single line of ARP output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Blank, header, banner or truncated line
    Skipped,
    Complete(ArpRecord),
    Incomplete(ArpRecord),
}

/// Splits `show ip arp` output into complete and incomplete entries.
pub struct ArpClassifier {
    unresolved_marker: String,
    zero_mac_is_incomplete: bool,
}

impl ArpClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            unresolved_marker: config.unresolved_marker.clone(),
            zero_mac_is_incomplete: config.zero_mac_is_incomplete,
        }
    }

    /// Scans every line once and collects the incomplete entries in order.
    pub fn classify<I, S>(&self, lines: I) -> IncompleteMacReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut incomplete = Vec::new();
        let mut scanned = 0usize;
        let mut skipped = 0usize;

        for (line_num, line) in lines.into_iter().enumerate() {
            match self.classify_line(line.as_ref()) {
                LineClass::Skipped => {
                    trace!(line = line_num + 1, "Skipping non-data line");
                    skipped += 1;
                }
                LineClass::Complete(_) => scanned += 1,
                LineClass::Incomplete(record) => {
                    debug!(
                        line = line_num + 1,
                        address = %record.address,
                        mac = %record.mac,
                        "Incomplete ARP entry"
                    );
                    scanned += 1;
                    incomplete.push(record);
                }
            }
        }

        debug!(
            scanned,
            skipped,
            incomplete = incomplete.len(),
            "ARP output classified"
        );
        IncompleteMacReport::new(incomplete, scanned, skipped)
    }

    pub fn classify_line(&self, line: &str) -> LineClass {
        let raw = line
            .strip_prefix('\u{feff}')
            .unwrap_or(line)
            .trim_end_matches(['\r', '\n']);
        let mut fields: Vec<&str> = raw.split_whitespace().collect();

        if fields
            .first()
            .is_some_and(|f| f.eq_ignore_ascii_case(PROTOCOL_COLUMN))
        {
            fields.remove(0);
        }

        if fields.len() < MIN_COLUMNS {
            return LineClass::Skipped;
        }

        // Header rows and CLI prompts carry no address in the first column
        if fields[ADDRESS_COLUMN].parse::<IpAddr>().is_err() {
            return LineClass::Skipped;
        }

        let complete = self.is_complete_mac(fields[MAC_COLUMN])
            && !fields.iter().any(|f| self.is_unresolved_marker(f));

        let record = ArpRecord::new(
            Arc::from(fields[ADDRESS_COLUMN]),
            Arc::from(fields[AGE_COLUMN]),
            Arc::from(fields[MAC_COLUMN]),
            fields.get(TYPE_COLUMN).map(|f| Arc::from(*f)),
            fields.get(INTERFACE_COLUMN).map(|f| Arc::from(*f)),
            Arc::from(raw),
        );

        if complete {
            LineClass::Complete(record)
        } else {
            LineClass::Incomplete(record)
        }
    }

    fn is_complete_mac(&self, token: &str) -> bool {
        match MacAddress::parse(token) {
            Ok(mac) => !(self.zero_mac_is_incomplete && mac.is_zero()),
            Err(_) => false,
        }
    }

    fn is_unresolved_marker(&self, field: &str) -> bool {
        field.eq_ignore_ascii_case(&self.unresolved_marker)
    }
}

impl Default for ArpClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}
