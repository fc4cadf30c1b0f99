use async_trait::async_trait;

use coindeck_market_data::models::{AssetQuote, PricePoint};

use crate::errors::Result;

use super::board_model::ListingQuery;

/// Service-level contract consumed by presentation layers.
///
/// This is the whole coupling surface: rendering code calls back into
/// the core only through these four operations.
#[async_trait]
pub trait BoardServiceTrait: Send + Sync {
    /// The aggregated listing: the pinned exchange pair first when its
    /// feed is reachable, then the general market list in descending
    /// market cap order, with the pinned asset's general-feed duplicate
    /// removed.
    async fn listings(&self) -> Result<Vec<AssetQuote>>;

    /// The aggregated listing filtered and sorted for display.
    async fn screen(&self, query: &ListingQuery) -> Result<Vec<AssetQuote>>;

    /// 7-day price series for one listed asset. An empty series means
    /// the upstream fetch failed or had no data; the detail view
    /// renders it as "no data".
    async fn chart_series(&self, asset_id: &str) -> Result<Vec<PricePoint>>;

    /// Drop every cached fetch so the next access goes back to the
    /// providers regardless of TTL.
    fn refresh(&self);
}
