//! History entry type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded conversion. Immutable once stored; the log only ever
/// prepends and trims.
///
/// Field names serialize in camelCase to stay compatible with the log
/// format the web calculators wrote to localStorage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub from_value: f64,
    pub from_unit: String,
    pub to_value: f64,
    pub to_unit: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub from_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub to_symbol: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        from_value: f64,
        from_unit: impl Into<String>,
        to_value: f64,
        to_unit: impl Into<String>,
    ) -> Self {
        HistoryEntry {
            from_value,
            from_unit: from_unit.into(),
            to_value,
            to_unit: to_unit.into(),
            from_symbol: None,
            to_symbol: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach display symbols (e.g. "$" and "€" for a currency conversion)
    pub fn with_symbols(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_symbol = Some(from.into());
        self.to_symbol = Some(to.into());
        self
    }
}
