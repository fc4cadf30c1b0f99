//! Binance spot market feed.
//!
//! Serves the pinned trading pair:
//! - 24h ticker statistics via /ticker/24hr
//! - candlestick history via /klines (default window: 7 days hourly)
//!
//! Public endpoints, no API key required. The ticker reports all
//! numeric values as strings and its volume in the base asset, so the
//! client converts volume into the quote currency at the last price.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{AssetQuote, PricePoint, QuoteSource, SpotPair};

const BASE_URL: &str = "https://api.binance.com/api/v3";
const PROVIDER_ID: &str = "BINANCE";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /ticker/24hr. Every numeric field arrives as a string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker24hResponse {
    last_price: String,
    price_change_percent: String,
    high_price: String,
    low_price: String,
    /// 24h volume denominated in the base asset, not the quote currency.
    volume: String,
}

// ============================================================================
// BinanceProvider
// ============================================================================

/// Binance spot feed client for the pinned pair.
pub struct BinanceProvider {
    client: Client,
}

impl BinanceProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Make a GET request to the Binance API.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<String, MarketDataError> {
        let url = format!("{}{}", BASE_URL, endpoint);

        debug!("Binance request: {} with {} params", endpoint, params.len());

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

    /// Fetch the 24h ticker for the pinned pair and normalize it.
    pub async fn get_spot_quote(&self, pair: &SpotPair) -> Result<AssetQuote, MarketDataError> {
        debug!("Fetching 24h ticker for {} from Binance", pair.pair_symbol);

        let params = [("symbol", pair.pair_symbol.as_str())];
        let text = self.fetch("/ticker/24hr", &params).await?;

        let response: Ticker24hResponse =
            serde_json::from_str(&text).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse ticker response: {}", e),
            })?;

        quote_from_ticker(pair, &response)
    }

    /// Fetch candlestick history for a pair symbol.
    ///
    /// Each kline element is a JSON array; only open time (`[0]`, ms
    /// epoch) and close price (`[4]`, numeric string) are consumed.
    /// Returns the series sorted ascending by timestamp.
    pub async fn get_kline_series(
        &self,
        pair_symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        let limit_str = limit.to_string();
        let params = [
            ("symbol", pair_symbol),
            ("interval", interval),
            ("limit", limit_str.as_str()),
        ];

        let text = self.fetch("/klines", &params).await?;

        let rows: Vec<Vec<serde_json::Value>> =
            serde_json::from_str(&text).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse kline response: {}", e),
            })?;

        let mut points = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            match parse_kline_row(row) {
                Some(point) => points.push(point),
                None => warn!("Skipping malformed kline row at index {}", i),
            }
        }

        points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

        debug!(
            "Binance: fetched {} kline points for {}",
            points.len(),
            pair_symbol
        );

        Ok(points)
    }
}

impl Default for BinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Normalize a ticker response into an `AssetQuote`.
///
/// The exchange feed carries no capitalization data: `market_cap` and
/// `circulating_supply` are set to the `0` sentinel and the rank is
/// pinned to `1`.
fn quote_from_ticker(
    pair: &SpotPair,
    response: &Ticker24hResponse,
) -> Result<AssetQuote, MarketDataError> {
    let current_price = parse_field("lastPrice", &response.last_price)?;
    let price_change = parse_field("priceChangePercent", &response.price_change_percent)?;
    let high_24h = parse_field("highPrice", &response.high_price)?;
    let low_24h = parse_field("lowPrice", &response.low_price)?;
    let base_volume = parse_field("volume", &response.volume)?;

    Ok(AssetQuote {
        id: pair.asset_id.clone(),
        symbol: pair.base_symbol.clone(),
        name: pair.display_name.clone(),
        image_url: pair.image_url.clone(),
        current_price,
        market_cap: Decimal::ZERO,
        market_cap_rank: 1,
        price_change_percent_24h: Some(price_change),
        high_24h,
        low_24h,
        total_volume: base_volume * current_price,
        circulating_supply: Decimal::ZERO,
        source: QuoteSource::Binance,
    })
}

fn parse_field(field: &str, raw: &str) -> Result<Decimal, MarketDataError> {
    raw.parse::<Decimal>()
        .map_err(|_| MarketDataError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Non-numeric {}: {:?}", field, raw),
        })
}

fn parse_kline_row(row: &[serde_json::Value]) -> Option<PricePoint> {
    let open_time = row.first()?.as_i64()?;
    let close = row.get(4)?.as_str()?.parse::<Decimal>().ok()?;
    let timestamp = Utc.timestamp_millis_opt(open_time).single()?;

    Some(PricePoint {
        timestamp,
        price: close,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureKind;
    use rust_decimal_macros::dec;

    fn vanry_pair() -> SpotPair {
        SpotPair::default()
    }

    #[test]
    fn test_ticker_response_parsing() {
        let json = r#"{
            "symbol": "VANRYUSDT",
            "priceChange": "-0.0826",
            "priceChangePercent": "-3.20",
            "lastPrice": "2.50",
            "highPrice": "2.70",
            "lowPrice": "2.40",
            "volume": "100000",
            "quoteVolume": "252123.40",
            "count": 8412
        }"#;

        let response: Ticker24hResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.last_price, "2.50");
        assert_eq!(response.volume, "100000");
    }

    #[test]
    fn test_quote_from_ticker_converts_volume_to_quote_currency() {
        let response = Ticker24hResponse {
            last_price: "2.50".to_string(),
            price_change_percent: "-3.20".to_string(),
            high_price: "2.70".to_string(),
            low_price: "2.40".to_string(),
            volume: "100000".to_string(),
        };

        let quote = quote_from_ticker(&vanry_pair(), &response).unwrap();
        assert_eq!(quote.current_price, dec!(2.50));
        assert_eq!(quote.price_change_percent_24h, Some(dec!(-3.20)));
        assert_eq!(quote.high_24h, dec!(2.70));
        assert_eq!(quote.low_24h, dec!(2.40));
        assert_eq!(quote.total_volume, dec!(250000));
    }

    #[test]
    fn test_quote_from_ticker_sets_unknown_sentinels() {
        let response = Ticker24hResponse {
            last_price: "0.0412".to_string(),
            price_change_percent: "1.10".to_string(),
            high_price: "0.0430".to_string(),
            low_price: "0.0398".to_string(),
            volume: "5000000".to_string(),
        };

        let quote = quote_from_ticker(&vanry_pair(), &response).unwrap();
        assert_eq!(quote.id, "vanry-binance");
        assert_eq!(quote.symbol, "vanry");
        assert_eq!(quote.market_cap, Decimal::ZERO);
        assert_eq!(quote.market_cap_rank, 1);
        assert_eq!(quote.circulating_supply, Decimal::ZERO);
        assert_eq!(quote.source, QuoteSource::Binance);
    }

    #[test]
    fn test_quote_from_ticker_rejects_non_numeric_field() {
        let response = Ticker24hResponse {
            last_price: "not-a-number".to_string(),
            price_change_percent: "-3.20".to_string(),
            high_price: "2.70".to_string(),
            low_price: "2.40".to_string(),
            volume: "100000".to_string(),
        };

        let error = quote_from_ticker(&vanry_pair(), &response).unwrap_err();
        assert_eq!(error.failure_kind(), FailureKind::Malformed);
        assert!(format!("{}", error).contains("lastPrice"));
    }

    #[test]
    fn test_ticker_response_missing_field_fails() {
        let json = r#"{"lastPrice": "2.50", "highPrice": "2.70"}"#;
        let result: Result<Ticker24hResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_kline_row() {
        let row: Vec<serde_json::Value> = serde_json::from_str(
            r#"[1700000000000, "2.41", "2.47", "2.39", "2.45", "81234.5",
                1700003599999, "198221.12", 412, "40021.1", "97712.9", "0"]"#,
        )
        .unwrap();

        let point = parse_kline_row(&row).unwrap();
        assert_eq!(point.timestamp.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(point.price, dec!(2.45));
    }

    #[test]
    fn test_parse_kline_row_rejects_bad_close() {
        let row: Vec<serde_json::Value> =
            serde_json::from_str(r#"[1700000000000, "2.41", "2.47", "2.39", null]"#).unwrap();
        assert!(parse_kline_row(&row).is_none());

        let short_row: Vec<serde_json::Value> =
            serde_json::from_str(r#"[1700000000000, "2.41"]"#).unwrap();
        assert!(parse_kline_row(&short_row).is_none());
    }
}
