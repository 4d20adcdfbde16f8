//! Provider seam for fetching a day's worth of exchange rate listings.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One per-currency entry from the bank's `exchangeRate` array. Only the
/// National Bank rates are carried; the commercial rates in the same payload
/// are not used.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RateListing {
    pub currency: String,
    #[serde(alias = "saleRateNB")]
    pub sale_rate_nb: f64,
    #[serde(alias = "purchaseRateNB")]
    pub purchase_rate_nb: f64,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches all currency listings for a single date (`DD.MM.YYYY`).
    async fn fetch_day(&self, date: &str) -> Result<Vec<RateListing>>;
}
