//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use coindeck_core::Error as CoreError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper that renders core errors as a JSON body with the right
/// status: unknown assets are 404, upstream feed failures are 502.
pub struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CoreError::AssetNotFound(_) => StatusCode::NOT_FOUND,
            CoreError::MarketData(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(serde_json::json!({
            "error": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}
