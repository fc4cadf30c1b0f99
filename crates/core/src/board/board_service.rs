use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, warn};

use coindeck_market_data::models::{AssetQuote, PricePoint, QuoteSource, SpotPair};
use coindeck_market_data::provider::{BinanceProvider, CoinGeckoProvider};

use crate::cache::{cache_key, TtlCache};
use crate::constants::{
    CHART_DAYS, KLINE_INTERVAL, KLINE_POINTS, MARKET_PAGE_SIZE, QUOTE_TTL_SECS, SERIES_TTL_SECS,
};
use crate::errors::{Error, Result};

use super::board_model::ListingQuery;
use super::board_traits::BoardServiceTrait;
use super::filter::filter_and_sort;

/// Aggregates the pinned exchange pair with the general market listing
/// and memoizes every upstream fetch behind a TTL cache.
///
/// Listing fetches use the short quote TTL; chart series use the
/// longer series TTL. Only successful fetches are cached, and
/// [`refresh`](BoardServiceTrait::refresh) drops both tables at once.
pub struct BoardService {
    binance: Arc<BinanceProvider>,
    coingecko: Arc<CoinGeckoProvider>,
    pair: SpotPair,
    page_size: u32,
    listings_cache: TtlCache<Vec<AssetQuote>>,
    series_cache: TtlCache<Vec<PricePoint>>,
}

impl BoardService {
    pub fn new(
        binance: Arc<BinanceProvider>,
        coingecko: Arc<CoinGeckoProvider>,
        pair: SpotPair,
    ) -> Self {
        Self::with_page_size(binance, coingecko, pair, MARKET_PAGE_SIZE)
    }

    pub fn with_page_size(
        binance: Arc<BinanceProvider>,
        coingecko: Arc<CoinGeckoProvider>,
        pair: SpotPair,
        page_size: u32,
    ) -> Self {
        Self {
            binance,
            coingecko,
            pair,
            page_size,
            listings_cache: TtlCache::new(Duration::from_secs(QUOTE_TTL_SECS)),
            series_cache: TtlCache::new(Duration::from_secs(SERIES_TTL_SECS)),
        }
    }

    /// Fetch both feeds and merge them.
    ///
    /// The two calls run concurrently and fail independently: losing
    /// the exchange feed degrades to the general listing with a
    /// warning, while losing the general feed fails the whole fetch
    /// since it is the primary source.
    async fn fetch_listings(&self) -> Result<Vec<AssetQuote>> {
        let (spot, markets) = tokio::join!(
            self.binance.get_spot_quote(&self.pair),
            self.coingecko.get_markets(self.page_size, 1),
        );

        let spot = match spot {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!(
                    "Could not fetch {} from Binance: {}",
                    self.pair.pair_symbol, e
                );
                None
            }
        };

        let markets = markets.inspect_err(|e| {
            error!("Error fetching market listing from CoinGecko: {}", e);
        })?;

        Ok(merge_listings(spot, markets))
    }
}

#[async_trait]
impl BoardServiceTrait for BoardService {
    async fn listings(&self) -> Result<Vec<AssetQuote>> {
        let page_size = self.page_size.to_string();
        let key = cache_key("listings", &[&self.pair.pair_symbol, &page_size]);

        if let Some(cached) = self.listings_cache.get(&key) {
            debug!("Serving listings from cache");
            return Ok(cached);
        }

        let fresh = self.fetch_listings().await?;
        self.listings_cache.insert(key, fresh.clone());
        Ok(fresh)
    }

    async fn screen(&self, query: &ListingQuery) -> Result<Vec<AssetQuote>> {
        let assets = self.listings().await?;
        Ok(filter_and_sort(&assets, query))
    }

    async fn chart_series(&self, asset_id: &str) -> Result<Vec<PricePoint>> {
        let assets = self.listings().await?;
        let asset = assets
            .iter()
            .find(|quote| quote.id == asset_id)
            .ok_or_else(|| Error::AssetNotFound(asset_id.to_string()))?;

        let points = KLINE_POINTS.to_string();
        let days = CHART_DAYS.to_string();

        let (key, fetched) = match asset.source {
            QuoteSource::Binance => {
                let key = cache_key("klines", &[&self.pair.pair_symbol, KLINE_INTERVAL, &points]);
                if let Some(cached) = self.series_cache.get(&key) {
                    debug!("Serving chart series from cache for {}", asset_id);
                    return Ok(cached);
                }
                let fetched = self
                    .binance
                    .get_kline_series(&self.pair.pair_symbol, KLINE_INTERVAL, KLINE_POINTS)
                    .await;
                (key, fetched)
            }
            QuoteSource::Coingecko => {
                let key = cache_key("market_chart", &[asset_id, &days]);
                if let Some(cached) = self.series_cache.get(&key) {
                    debug!("Serving chart series from cache for {}", asset_id);
                    return Ok(cached);
                }
                let fetched = self.coingecko.get_market_chart(asset_id, CHART_DAYS).await;
                (key, fetched)
            }
        };

        match fetched {
            Ok(series) => {
                self.series_cache.insert(key, series.clone());
                Ok(series)
            }
            Err(e) => {
                // The detail view renders "no data" instead of failing.
                error!("Error fetching chart series for {}: {}", asset_id, e);
                Ok(Vec::new())
            }
        }
    }

    fn refresh(&self) {
        self.listings_cache.clear();
        self.series_cache.clear();
        info!("Cleared all cached market data");
    }
}

/// Merge the pinned-pair quote with the general market list.
///
/// The pinned quote leads the board; any general-feed record with the
/// same symbol (case-insensitive) is dropped in its favor. Without a
/// pinned quote the general list passes through untouched.
fn merge_listings(spot: Option<AssetQuote>, mut markets: Vec<AssetQuote>) -> Vec<AssetQuote> {
    let Some(spot) = spot else {
        return markets;
    };

    markets.retain(|quote| !quote.symbol.eq_ignore_ascii_case(&spot.symbol));

    let mut merged = Vec::with_capacity(markets.len() + 1);
    merged.push(spot);
    merged.append(&mut markets);
    merged
}
