//! Feed client implementations.
//!
//! This module contains:
//! - `binance` - exchange feed for the pinned trading pair (ticker + klines)
//! - `coingecko` - general market feed for the ranked listing (markets + chart)
//!
//! Both clients are read-only and idempotent: every operation is a
//! single HTTP GET with a 10s timeout, no retries, and no shared state
//! beyond the connection pool inside each client. Failures never
//! escape as panics; they map onto [`MarketDataError`](crate::errors::MarketDataError)
//! and the caller decides the severity.

pub mod binance;
pub mod coingecko;

pub use binance::BinanceProvider;
pub use coingecko::CoinGeckoProvider;
