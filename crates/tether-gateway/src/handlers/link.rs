use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tether_core::{Resolution, ShortCode};
use url::Url;

use crate::error::PageError;
use crate::page;
use crate::state::AppState;

/// Resolves a short code into a redirect, raw text or a formatted page.
pub async fn resolve_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, PageError> {
    let code = ShortCode::new_unchecked(short_code);
    let record = state.links().resolve(&code).await?;

    let response = match record.resolution() {
        Resolution::Redirect(target) => {
            // Normalized form is always a valid header value, the raw content may not be.
            let location = Url::parse(target)
                .map(String::from)
                .unwrap_or_else(|_| target.to_owned());
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        Resolution::Raw(content) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            content.to_owned(),
        )
            .into_response(),
        Resolution::Page(content) => {
            Html(page::render(&code, content, record.clicks)).into_response()
        }
    };

    Ok(response)
}

pub async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
