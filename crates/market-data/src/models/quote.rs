use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which upstream feed produced a quote.
///
/// Downstream code dispatches on this: exchange-sourced assets chart
/// through the kline endpoint, market-index assets through the
/// market-chart endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    /// The Binance spot API serving the pinned trading pair.
    Binance,
    /// The CoinGecko markets API serving the ranked listing.
    Coingecko,
}

/// One normalized snapshot of a tradeable asset.
///
/// This is the common currency between the two feed clients and the
/// filter engine. Monetary fields are USD. The exchange feed does not
/// report capitalization data, so `market_cap` and `circulating_supply`
/// use `0` as a "not reported" sentinel rather than a real valuation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetQuote {
    /// Stable identifier, unique within one aggregated result.
    pub id: String,

    /// Ticker symbol, lowercase as the feeds report it.
    pub symbol: String,

    /// Display name.
    pub name: String,

    /// Logo URL; may be a placeholder.
    pub image_url: String,

    /// Last traded price in USD.
    pub current_price: Decimal,

    /// Market capitalization in USD; `0` when the feed does not report one.
    pub market_cap: Decimal,

    /// Rank by market capitalization. The pinned exchange pair carries
    /// `1` since its feed has no ranking; `0` when the general feed
    /// omits a rank.
    pub market_cap_rank: u32,

    /// 24h price change in percent; `None` when the feed omits it.
    pub price_change_percent_24h: Option<Decimal>,

    /// Highest trade price over the last 24h, USD.
    pub high_24h: Decimal,

    /// Lowest trade price over the last 24h, USD.
    pub low_24h: Decimal,

    /// 24h traded volume in USD equivalent.
    pub total_volume: Decimal,

    /// Circulating supply in base units; `0` when not reported.
    pub circulating_supply: Decimal,

    /// Which feed produced this record.
    pub source: QuoteSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_quote() -> AssetQuote {
        AssetQuote {
            id: "bitcoin".to_string(),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            image_url: "https://example.com/btc.png".to_string(),
            current_price: dec!(64250.12),
            market_cap: dec!(1250000000000),
            market_cap_rank: 1,
            price_change_percent_24h: Some(dec!(-1.25)),
            high_24h: dec!(65000),
            low_24h: dec!(63000),
            total_volume: dec!(32000000000),
            circulating_supply: dec!(19700000),
            source: QuoteSource::Coingecko,
        }
    }

    #[test]
    fn test_quote_serializes_camel_case() {
        let value = serde_json::to_value(sample_quote()).unwrap();
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("currentPrice").is_some());
        assert!(value.get("marketCapRank").is_some());
        assert!(value.get("priceChangePercent24h").is_some());
        assert_eq!(value["source"], "coingecko");
    }

    #[test]
    fn test_quote_round_trip() {
        let quote = sample_quote();
        let json = serde_json::to_string(&quote).unwrap();
        let back: AssetQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, quote.id);
        assert_eq!(back.current_price, quote.current_price);
        assert_eq!(back.price_change_percent_24h, quote.price_change_percent_24h);
        assert_eq!(back.source, QuoteSource::Coingecko);
    }

    #[test]
    fn test_source_tag_values() {
        assert_eq!(
            serde_json::to_value(QuoteSource::Binance).unwrap(),
            serde_json::json!("binance")
        );
        assert_eq!(
            serde_json::to_value(QuoteSource::Coingecko).unwrap(),
            serde_json::json!("coingecko")
        );
    }
}
