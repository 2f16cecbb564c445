//! Rate-feed client
//!
//! The feed is fire-and-forget relative to user input: conversions run
//! against whatever table is active while a refresh is in flight, and the
//! last refresh to resolve wins.

use std::collections::HashMap;
use std::time::Duration;
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, warn};
use calcpro_core::CalcError;
use crate::{RateSource, RateTable};

/// Free exchange-rate endpoint; rates relative to USD
pub const FEED_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

#[derive(Debug, Deserialize)]
struct FeedResponse {
    rates: HashMap<String, f64>,
}

/// Holder of the currently active rate table.
///
/// Starts on the built-in fallback and swaps in live data when a refresh
/// succeeds. A failed refresh keeps the current table, so conversion never
/// becomes unavailable.
pub struct RateStore {
    client: reqwest::Client,
    table: RateTable,
    url: String,
}

impl RateStore {
    pub fn new() -> Self {
        Self::with_url(FEED_URL)
    }

    /// Point the store at a different endpoint (used by tests)
    pub fn with_url(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        RateStore {
            client,
            table: RateTable::fallback(),
            url: url.into(),
        }
    }

    /// The currently active table
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    pub fn source(&self) -> RateSource {
        self.table.source()
    }

    /// Fetch the live rates and replace the active table.
    ///
    /// On any transport or parse failure the current table stays active and
    /// the error is reported as `RateFeedUnavailable`; callers may log it
    /// but conversion keeps working against the old data.
    pub async fn refresh(&mut self) -> Result<(), CalcError> {
        match self.fetch().await {
            Ok(rates) => {
                debug!(count = rates.len(), "exchange rates updated");
                self.table = RateTable::live(rates, Utc::now());
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rate feed unavailable, keeping current table");
                Err(CalcError::RateFeedUnavailable(err))
            }
        }
    }

    async fn fetch(&self) -> Result<HashMap<String, f64>, String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        let feed: FeedResponse = response.json().await.map_err(|e| e.to_string())?;
        if feed.rates.is_empty() {
            return Err("feed returned no rates".to_string());
        }
        Ok(feed.rates)
    }
}

impl Default for RateStore {
    fn default() -> Self {
        Self::new()
    }
}
