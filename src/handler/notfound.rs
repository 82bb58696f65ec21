use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::response::ApiResponse;

pub async fn handler_404() -> impl IntoResponse {
    let status = StatusCode::NOT_FOUND;
    (status, Json(ApiResponse::error(Some("Not found"), status)))
}
