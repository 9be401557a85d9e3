use serde::{Deserialize, Serialize};

/// A single legislative bill as supplied by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Human-readable origin, e.g. "California" or "U.S. Federal"
    #[serde(alias = "state")]
    pub jurisdiction: String,
    pub title: String,
    pub summary: String,
    /// Display tags, rendered in order
    #[serde(default)]
    pub key_issues: Vec<String>,
    #[serde(default)]
    pub stats: BillStats,
    /// Free-text lifecycle label such as "Senate Floor" or "In Committee"
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_date: Option<String>,
}

/// Engagement counters shown at the bottom of a card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillStats {
    #[serde(default)]
    pub like: u64,
    #[serde(default)]
    pub dislike: u64,
    #[serde(default)]
    pub watch: u64,
}

/// Bill file contents: either a bare list or an object wrapping one
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BillFile {
    List(Vec<Bill>),
    Wrapped { bills: Vec<Bill> },
}

impl BillFile {
    pub fn into_bills(self) -> Vec<Bill> {
        match self {
            BillFile::List(bills) => bills,
            BillFile::Wrapped { bills } => bills,
        }
    }
}
