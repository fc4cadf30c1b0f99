//! Coindeck Market Data Crate
//!
//! This crate provides the two upstream feed clients for the Coindeck
//! board and the normalized records they produce.
//!
//! # Overview
//!
//! Two independent feeds cover the listing:
//! - The Binance spot API serves authoritative data for one pinned
//!   trading pair (24h ticker and kline history).
//! - The CoinGecko markets API serves the broad ranked listing and
//!   per-asset price series.
//!
//! Both clients normalize their payloads into [`AssetQuote`] and
//! [`PricePoint`] so nothing downstream knows which wire format a
//! record came from beyond its [`QuoteSource`] tag.
//!
//! # Core Types
//!
//! - [`AssetQuote`] - Normalized per-asset snapshot
//! - [`PricePoint`] - One sample of a chart series
//! - [`SpotPair`] - Descriptor of the pinned exchange pair
//! - [`QuoteSource`] - Which feed produced a record

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{AssetQuote, PricePoint, QuoteSource, SpotPair};

// Re-export provider types
pub use provider::{BinanceProvider, CoinGeckoProvider};

// Re-export error types
pub use errors::{FailureKind, MarketDataError};
