use serde::{Deserialize, Serialize};
use tether_core::{CreateParams, StatsView};

/// Body of `POST /api/create`.
///
/// Missing or `null` fields fall back to empty content, no custom code
/// and formatted display.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub custom_code: Option<String>,
    #[serde(default)]
    pub raw_display: Option<bool>,
}

impl From<CreateLinkRequest> for CreateParams {
    fn from(request: CreateLinkRequest) -> Self {
        CreateParams {
            content: request.content.unwrap_or_default(),
            custom_code: request.custom_code,
            raw_display: request.raw_display.unwrap_or(false),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub success: bool,
    pub short_url: String,
    pub short_code: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: StatsView,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
