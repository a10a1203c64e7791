//! # Sector Performance
//!
//! The `SECTOR` function returns ten rankings (`real`, `1day`, `5day`,
//! `1month`, `3month`, `ytd`, `1year`, `3year`, `5year`, `10year` once
//! normalized), each a map of sector name to percentage change.

use crate::markets::alphavantage::apicall::{ApiCallAv, AvError};
use crate::markets::alphavantage::params::Function;
use serde_json::Value;
use std::sync::Arc;

/// Normalized ranking keys, in upstream order.
pub const RANKINGS: [&str; 10] = [
    "real", "1day", "5day", "1month", "3month", "ytd", "1year", "3year", "5year", "10year",
];

/// Client for the sector performance function.
pub struct Performance {
    api_call: Arc<ApiCallAv>,
}

impl Performance {
    /// Creates a new `Performance` client on a shared caller.
    pub fn new(api_call: Arc<ApiCallAv>) -> Self {
        Self { api_call }
    }

    /// Query URL for the sector rankings.
    pub fn url(&self) -> String {
        self.api_call.util().url(Some(Function::Sector.as_str()), None, None, None, None)
    }

    /// Fetches and normalizes the sector rankings.
    pub async fn sector(&self) -> Result<Value, AvError> {
        self.api_call.fetch_polished(&self.url()).await
    }
}

/// The rankings from [`RANKINGS`] missing from a normalized sector payload.
pub fn missing_rankings(data: &Value) -> Vec<&'static str> {
    RANKINGS.iter().copied().filter(|k| data.get(*k).is_none()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markets::alphavantage::keys;
    use serde_json::json;

    #[test]
    fn rankings_match_the_rename_table() {
        for ranking in RANKINGS {
            assert!(keys::RENAMES.iter().any(|(_, to)| *to == ranking), "{ranking}");
        }
    }

    #[test]
    fn reports_missing_rankings() {
        let data = json!({"meta": {}, "real": {}, "ytd": {}});
        let missing = missing_rankings(&data);
        assert_eq!(missing.len(), 8);
        assert!(!missing.contains(&"real"));
        assert!(missing.contains(&"10year"));
    }
}
