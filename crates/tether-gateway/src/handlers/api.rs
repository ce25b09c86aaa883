use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tether_core::ShortCode;
use tracing::debug;

use crate::error::ApiError;
use crate::model::{CreateLinkRequest, CreateLinkResponse, ErrorResponse, StatsResponse};
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

pub async fn create_link_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<CreateLinkResponse>> {
    let Json(request) = request.map_err(|rejection| {
        debug!(error = %rejection, "rejected create request body");
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let created = state.links().create(request.into()).await?;

    Ok(Json(CreateLinkResponse {
        success: true,
        short_url: state.short_url(&created.short_code),
        short_code: created.short_code.to_string(),
    }))
}

pub async fn stats_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>> {
    let code = ShortCode::new_unchecked(short_code);
    let stats = state.links().stats(&code).await?;

    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}

pub async fn api_not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("API Not Found")),
    )
}
