use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::rate_provider::{RateListing, RateProvider};

/// Client for the PrivatBank public archive API.
///
/// One GET per date; the connection lives only for the duration of a single
/// request attempt. No retries.
pub struct PrivatbankProvider {
    base_url: String,
}

impl PrivatbankProvider {
    pub fn new(base_url: &str) -> Self {
        PrivatbankProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRatesResponse {
    #[serde(alias = "exchangeRate")]
    exchange_rate: Vec<RateListing>,
}

#[async_trait]
impl RateProvider for PrivatbankProvider {
    async fn fetch_day(&self, date: &str) -> Result<Vec<RateListing>> {
        let url = format!("{}/p24api/exchange_rates?json&date={}", self.base_url, date);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("pbrates/0.1").build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for URL: {}",
                response.status(),
                url
            ));
        }

        let text = response.text().await?;

        let data: ExchangeRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", date, e))?;

        Ok(data.exchange_rate)
    }
}
