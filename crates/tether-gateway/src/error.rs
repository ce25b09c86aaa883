use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tether_core::LinkError;
use tracing::error;

use crate::model::ErrorResponse;

/// Errors from the JSON API, rendered as `{"success":false,"error":...}`.
#[derive(Debug)]
pub enum ApiError {
    Link(LinkError),
    BadRequest(String),
}

impl From<LinkError> for ApiError {
    fn from(error: LinkError) -> Self {
        ApiError::Link(error)
    }
}

/// Errors from short link access, rendered as plain text.
#[derive(Debug)]
pub struct PageError(pub LinkError);

impl From<LinkError> for PageError {
    fn from(error: LinkError) -> Self {
        PageError(error)
    }
}

fn status_of(error: &LinkError) -> StatusCode {
    StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn user_message(error: &LinkError) -> String {
    match error {
        LinkError::EmptyContent => "Content cannot be empty".to_string(),
        LinkError::CodeTaken(_) => {
            "This short code is already taken, please choose another one".to_string()
        }
        LinkError::InvalidShortCode(reason) => format!("Invalid short code: {reason}"),
        LinkError::NotFound(_) => "Short link not found".to_string(),
        LinkError::Store(source) => {
            error!(error = %source, "storage failure while serving request");
            "Server error".to_string()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Link(error) => (status_of(&error), user_message(&error)),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (status_of(&self.0), user_message(&self.0)).into_response()
    }
}
