//! Market data models
//!
//! This module contains the core data types shared by the feed clients
//! and everything downstream of them:
//! - `quote` - Normalized per-asset snapshot (AssetQuote) and its source tag
//! - `series` - Chart samples (PricePoint)
//! - `pair` - Descriptor of the pinned exchange trading pair (SpotPair)

mod pair;
mod quote;
mod series;

pub use pair::SpotPair;
pub use quote::{AssetQuote, QuoteSource};
pub use series::PricePoint;
