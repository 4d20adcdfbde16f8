//! Day-indexed exchange rate fan-out and rendering.
//!
//! Dates are generated from today backward, one fetch future per date, all
//! awaited together. Results keep the submission order, so the output is
//! always most recent first regardless of completion order.

use chrono::{Duration, Local, NaiveDate};
use futures::future::join_all;
use std::fmt;
use tracing::warn;

use crate::rate_provider::{RateListing, RateProvider};

pub const MAX_DAYS: u32 = 10;

const DATE_FORMAT: &str = "%d.%m.%Y";

/// National Bank sale/purchase rates for one currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRate {
    pub sale: f64,
    pub purchase: f64,
}

/// EUR and USD rates for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRates {
    pub date: String,
    pub eur: CurrencyRate,
    pub usd: CurrencyRate,
}

/// Outcome of a single day's fetch. A failed request or a response missing
/// either currency collapses to `NotFound`; the rest of the batch continues.
#[derive(Debug, Clone, PartialEq)]
pub enum DayResult {
    Rates(DayRates),
    NotFound,
}

impl DayRates {
    /// Picks the first EUR and first USD listings out of a day's response.
    /// Returns `None` when either currency is absent.
    pub fn from_listings(date: &str, listings: &[RateListing]) -> Option<Self> {
        let eur = find_currency(listings, "EUR")?;
        let usd = find_currency(listings, "USD")?;
        Some(DayRates {
            date: date.to_string(),
            eur,
            usd,
        })
    }
}

fn find_currency(listings: &[RateListing], code: &str) -> Option<CurrencyRate> {
    listings.iter().find(|l| l.currency == code).map(|l| CurrencyRate {
        sale: l.sale_rate_nb,
        purchase: l.purchase_rate_nb,
    })
}

impl fmt::Display for DayRates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.date)?;
        let blocks = [("EUR", &self.eur), ("USD", &self.usd)].map(|(currency, rate)| {
            format!(
                "    {currency}:\n        sale: {}\n        purchase: {}",
                rate.sale, rate.purchase
            )
        });
        write!(f, "{}", blocks.join("\n"))
    }
}

impl fmt::Display for DayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayResult::Rates(rates) => write!(f, "{rates}"),
            DayResult::NotFound => write!(f, "Not found"),
        }
    }
}

/// `days` date keys counting backward from `today` inclusive.
pub fn dates_back_from(today: NaiveDate, days: u32) -> Vec<String> {
    (0..days)
        .map(|i| (today - Duration::days(i64::from(i))).format(DATE_FORMAT).to_string())
        .collect()
}

/// Fetches rates for the last `days` days concurrently, most recent first.
pub async fn fetch_last_days(provider: &dyn RateProvider, days: u32) -> Vec<DayResult> {
    let dates = dates_back_from(Local::now().date_naive(), days);
    fetch_dates(provider, dates).await
}

/// Fetches rates for the given date keys concurrently, preserving order.
pub async fn fetch_dates(provider: &dyn RateProvider, dates: Vec<String>) -> Vec<DayResult> {
    let tasks = dates.into_iter().map(|date| fetch_one_day(provider, date));
    join_all(tasks).await
}

async fn fetch_one_day(provider: &dyn RateProvider, date: String) -> DayResult {
    match provider.fetch_day(&date).await {
        Ok(listings) => match DayRates::from_listings(&date, &listings) {
            Some(rates) => DayResult::Rates(rates),
            None => {
                warn!(%date, "Response is missing EUR or USD listings");
                DayResult::NotFound
            }
        },
        Err(e) => {
            warn!(error = %e, %date, "Fetch failed");
            DayResult::NotFound
        }
    }
}
