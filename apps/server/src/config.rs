//! Server configuration, read once from the environment at startup.

use coindeck_core::constants::MARKET_PAGE_SIZE;
use coindeck_market_data::models::SpotPair;

/// Runtime configuration with sensible defaults; every knob can be
/// overridden through a `COINDECK_*` environment variable.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,

    /// Page size requested from the general market feed.
    pub page_size: u32,

    /// The exchange pair pinned to the top of the board.
    pub pair: SpotPair,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr = env_or("COINDECK_LISTEN_ADDR", "0.0.0.0:8080");

        let page_size = std::env::var("COINDECK_PAGE_SIZE")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(MARKET_PAGE_SIZE);

        let defaults = SpotPair::default();
        let pair = SpotPair::new(
            &env_or("COINDECK_PAIR_SYMBOL", &defaults.pair_symbol),
            &env_or("COINDECK_PAIR_BASE", &defaults.base_symbol),
            &env_or("COINDECK_PAIR_NAME", &defaults.display_name),
            &env_or("COINDECK_PAIR_IMAGE", &defaults.image_url),
        );

        Self {
            listen_addr,
            page_size,
            pair,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
