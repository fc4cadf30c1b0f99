use serde::{Deserialize, Serialize};

/// Categorical filter over the aggregated listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Everything, in aggregation order.
    #[default]
    All,
    /// Only assets with a reported, strictly positive 24h change,
    /// best performer first.
    Gainers,
    /// Only assets with a reported, strictly negative 24h change,
    /// worst performer first.
    Losers,
}

/// View state for one listing request.
///
/// Threaded explicitly from the presentation layer into the filter
/// engine instead of living in ambient session state; the selected
/// asset travels separately as the chart request's id.
#[derive(Clone, Debug, Default)]
pub struct ListingQuery {
    /// Free-text search; matches name or symbol, case-insensitively.
    /// Empty means no search restriction.
    pub search: String,

    /// Categorical filter to apply after the search.
    pub mode: FilterMode,
}
