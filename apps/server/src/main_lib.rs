use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use coindeck_core::board::{BoardService, BoardServiceTrait};
use coindeck_market_data::provider::{BinanceProvider, CoinGeckoProvider};

use crate::config::Config;

/// Shared application state handed to every handler.
pub struct AppState {
    pub board_service: Arc<dyn BoardServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("COINDECK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let binance = Arc::new(BinanceProvider::new());
    let coingecko = Arc::new(CoinGeckoProvider::new());
    let board_service = Arc::new(BoardService::with_page_size(
        binance,
        coingecko,
        config.pair.clone(),
        config.page_size,
    ));

    Arc::new(AppState { board_service })
}
