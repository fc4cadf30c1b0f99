//! Core error types for the Coindeck board.

use thiserror::Error;

use coindeck_market_data::errors::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for board operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),
}
