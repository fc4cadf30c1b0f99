use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use coindeck_core::board::{FilterMode, ListingQuery};
use coindeck_market_data::models::{AssetQuote, PricePoint};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(serde::Deserialize)]
struct ListingParams {
    search: Option<String>,
    filter: Option<FilterMode>,
}

/// The aggregated listing, filtered and sorted per the query.
async fn list_assets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> ApiResult<Json<Vec<AssetQuote>>> {
    let query = ListingQuery {
        search: params.search.unwrap_or_default(),
        mode: params.filter.unwrap_or_default(),
    };

    let assets = state.board_service.screen(&query).await?;
    Ok(Json(assets))
}

/// 7-day price series for one listed asset. Empty when the upstream
/// series fetch failed; 404 when the id is not on the board.
async fn get_chart_series(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<String>,
) -> ApiResult<Json<Vec<PricePoint>>> {
    let series = state.board_service.chart_series(&asset_id).await?;
    Ok(Json(series))
}

/// Drop every cached fetch; the next request hits the providers.
async fn refresh(State(state): State<Arc<AppState>>) -> StatusCode {
    state.board_service.refresh();
    StatusCode::NO_CONTENT
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets))
        .route("/assets/{id}/chart", get(get_chart_series))
        .route("/refresh", post(refresh))
}
