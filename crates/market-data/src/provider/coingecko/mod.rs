//! CoinGecko general market feed.
//!
//! Serves the broad listing:
//! - ranked market listing via /coins/markets
//! - 7-day price series via /coins/{id}/market_chart
//!
//! Public endpoints, no API key required. The free tier throttles
//! aggressively, which is why everything downstream is memoized.
//! API documentation: https://docs.coingecko.com/reference/introduction

use std::time::Duration;

use chrono::{TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{AssetQuote, PricePoint, QuoteSource};

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// API Response Structures
// ============================================================================

/// One row of the /coins/markets response. Everything beyond the
/// identity fields is nullable on the wire.
#[derive(Debug, Deserialize)]
struct MarketItem {
    id: String,
    symbol: String,
    name: String,
    image: Option<String>,
    current_price: Option<f64>,
    market_cap: Option<f64>,
    market_cap_rank: Option<u32>,
    price_change_percentage_24h: Option<f64>,
    high_24h: Option<f64>,
    low_24h: Option<f64>,
    total_volume: Option<f64>,
    circulating_supply: Option<f64>,
}

/// Response from /coins/{id}/market_chart.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    /// `[ms epoch, price]` pairs, ascending.
    prices: Vec<(f64, f64)>,
}

// ============================================================================
// CoinGeckoProvider
// ============================================================================

/// CoinGecko market data client.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Make a GET request to the CoinGecko API.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<String, MarketDataError> {
        let url = format!("{}{}", BASE_URL, endpoint);

        debug!(
            "CoinGecko request: {} with {} params",
            endpoint,
            params.len()
        );

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::Network(e)
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }

    /// Fetch one page of the market listing, ranked by descending
    /// market capitalization. Provider order is preserved; rows without
    /// a price are skipped.
    pub async fn get_markets(
        &self,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<AssetQuote>, MarketDataError> {
        let per_page_str = per_page.to_string();
        let page_str = page.to_string();
        let params = [
            ("vs_currency", "usd"),
            ("order", "market_cap_desc"),
            ("per_page", per_page_str.as_str()),
            ("page", page_str.as_str()),
            ("sparkline", "false"),
            ("price_change_percentage", "24h"),
        ];

        let text = self.fetch("/coins/markets", &params).await?;

        let items: Vec<MarketItem> =
            serde_json::from_str(&text).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse markets response: {}", e),
            })?;

        let quotes: Vec<AssetQuote> = items
            .into_iter()
            .filter_map(|item| {
                let id = item.id.clone();
                let quote = quote_from_market_item(item);
                if quote.is_none() {
                    warn!("Skipping market row without a price: {}", id);
                }
                quote
            })
            .collect();

        debug!("CoinGecko: fetched {} market rows", quotes.len());

        Ok(quotes)
    }

    /// Fetch the price series for one asset over the given day window.
    /// Returns the series sorted ascending by timestamp.
    pub async fn get_market_chart(
        &self,
        asset_id: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        let days_str = days.to_string();
        let params = [("vs_currency", "usd"), ("days", days_str.as_str())];
        let endpoint = format!("/coins/{}/market_chart", asset_id);

        let text = self.fetch(&endpoint, &params).await?;

        let response: MarketChartResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse market chart response: {}", e),
            })?;

        let mut points = Vec::with_capacity(response.prices.len());
        for (i, pair) in response.prices.iter().enumerate() {
            match parse_chart_pair(pair) {
                Some(point) => points.push(point),
                None => warn!("Skipping malformed chart sample at index {}", i),
            }
        }

        points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

        debug!(
            "CoinGecko: fetched {} chart points for {}",
            points.len(),
            asset_id
        );

        Ok(points)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Normalize one market row into an `AssetQuote`.
///
/// Missing optional fields map onto the unknown sentinels (`0` for
/// capitalization and supply, `None` for the 24h change, `0` for the
/// rank). A row with no price is unusable and yields `None`.
fn quote_from_market_item(item: MarketItem) -> Option<AssetQuote> {
    let current_price = item.current_price.and_then(decimal_from_f64)?;

    Some(AssetQuote {
        id: item.id,
        symbol: item.symbol,
        name: item.name,
        image_url: item.image.unwrap_or_default(),
        current_price,
        market_cap: item
            .market_cap
            .and_then(decimal_from_f64)
            .unwrap_or(Decimal::ZERO),
        market_cap_rank: item.market_cap_rank.unwrap_or(0),
        price_change_percent_24h: item.price_change_percentage_24h.and_then(decimal_from_f64),
        high_24h: item
            .high_24h
            .and_then(decimal_from_f64)
            .unwrap_or(Decimal::ZERO),
        low_24h: item
            .low_24h
            .and_then(decimal_from_f64)
            .unwrap_or(Decimal::ZERO),
        total_volume: item
            .total_volume
            .and_then(decimal_from_f64)
            .unwrap_or(Decimal::ZERO),
        circulating_supply: item
            .circulating_supply
            .and_then(decimal_from_f64)
            .unwrap_or(Decimal::ZERO),
        source: QuoteSource::Coingecko,
    })
}

fn parse_chart_pair(pair: &(f64, f64)) -> Option<PricePoint> {
    let timestamp = Utc.timestamp_millis_opt(pair.0 as i64).single()?;
    let price = decimal_from_f64(pair.1)?;

    Some(PricePoint { timestamp, price })
}

fn decimal_from_f64(value: f64) -> Option<Decimal> {
    Decimal::try_from(value).ok()
}

// ============================================================================
// Tests
// ============================================================================
