use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Token the device prints in the MAC column for unresolved entries.
    /// Compared case-insensitively.
    #[serde(default = "default_unresolved_marker")]
    pub unresolved_marker: String,

    /// Report `0000.0000.0000` as incomplete
    #[serde(default = "default_true")]
    pub zero_mac_is_incomplete: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            unresolved_marker: default_unresolved_marker(),
            zero_mac_is_incomplete: true,
        }
    }
}

fn default_unresolved_marker() -> String {
    "INCOMPLETE".to_string()
}

fn default_true() -> bool {
    true
}
