//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for all feed operations
//! - [`FailureKind`]: Classification used to pick the surfacing severity
//!
//! A valid zero-row outcome is not represented here: operations that
//! legitimately find nothing return empty collections.

mod kind;

pub use kind::FailureKind;

use thiserror::Error;

/// Errors that can occur while talking to a price feed.
///
/// Each variant is classified into a [`FailureKind`] via the
/// [`failure_kind`](Self::failure_kind) method, which determines how the
/// caller should surface the failure.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider throttled the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that throttled the request
        provider: String,
    },

    /// The provider answered with a non-success status or an otherwise
    /// unusable response.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider's payload could not be interpreted: invalid JSON, a
    /// missing field, or a non-numeric value where a number is required.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider whose payload failed to parse
        provider: String,
        /// Description of what failed to parse
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use coindeck_market_data::errors::{FailureKind, MarketDataError};
    ///
    /// let error = MarketDataError::Timeout { provider: "BINANCE".to_string() };
    /// assert_eq!(error.failure_kind(), FailureKind::Transport);
    /// ```
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. }
            | Self::RateLimited { .. }
            | Self::ProviderError { .. }
            | Self::Network(_) => FailureKind::Transport,

            Self::MalformedResponse { .. } => FailureKind::Malformed,
        }
    }
}
