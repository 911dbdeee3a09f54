use serde::{Deserialize, Serialize};

/// Ban status of one player account, as reported by the anti-cheat service.
///
/// Field defaults mirror what the service omits for sparse accounts, so a
/// partial payload still deserializes into a renderable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanStatusRecord {
    /// 0 = clean, anything else = banned.
    #[serde(default)]
    pub is_banned: i64,
    /// Suspension length in months, when the service knows it.
    #[serde(default = "default_period")]
    pub period: SuspensionPeriod,
    #[serde(default = "default_nickname")]
    pub nickname: String,
    #[serde(default = "default_region")]
    pub region: String,
}

impl BanStatusRecord {
    /// Whether this record classifies the account as banned.
    pub fn is_banned(&self) -> bool {
        self.is_banned != 0
    }
}

/// Suspension length: the service reports either a month count or an
/// arbitrary placeholder string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuspensionPeriod {
    Months(i64),
    Text(String),
}

impl SuspensionPeriod {
    /// The month count, if the service reported one.
    pub fn months(&self) -> Option<i64> {
        match self {
            SuspensionPeriod::Months(m) => Some(*m),
            SuspensionPeriod::Text(_) => None,
        }
    }
}

impl Default for SuspensionPeriod {
    fn default() -> Self {
        SuspensionPeriod::Text("N/A".to_string())
    }
}

// --- Default value functions ---

fn default_period() -> SuspensionPeriod {
    SuspensionPeriod::default()
}

fn default_nickname() -> String {
    "NA".to_string()
}

fn default_region() -> String {
    "N/A".to_string()
}
