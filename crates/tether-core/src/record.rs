use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored link record.
///
/// Everything except `clicks` is fixed at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// The submitted text or URL, trimmed.
    pub content: String,
    /// Whether `content` parsed as an absolute URL at creation.
    pub is_url: bool,
    /// Whether non-redirect resolutions emit the content as plain text.
    pub raw_display: bool,
    /// When the record was created.
    pub created_at: Timestamp,
    /// Number of successful resolutions.
    pub clicks: u64,
}

impl LinkRecord {
    /// Creates a fresh record with zero clicks, stamped with the current time.
    pub fn new(content: impl Into<String>, is_url: bool, raw_display: bool) -> Self {
        Self {
            content: content.into(),
            is_url,
            raw_display,
            created_at: Timestamp::now(),
            clicks: 0,
        }
    }

    /// Returns how a resolution of this record should be presented.
    pub fn resolution(&self) -> Resolution<'_> {
        match (self.is_url, self.raw_display) {
            (true, false) => Resolution::Redirect(&self.content),
            (_, true) => Resolution::Raw(&self.content),
            (false, false) => Resolution::Page(&self.content),
        }
    }
}

/// The three mutually exclusive ways a resolved record is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Redirect the client to the stored URL.
    Redirect(&'a str),
    /// Emit the stored content verbatim as plain text.
    Raw(&'a str),
    /// Render the stored content through the formatted page.
    Page(&'a str),
}

/// Read-only projection of a record returned by the stats operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub short_code: String,
    pub clicks: u64,
    pub created_at: Timestamp,
    pub is_url: bool,
    pub raw_display: bool,
}

impl StatsView {
    pub fn new(code: &ShortCode, record: &LinkRecord) -> Self {
        Self {
            short_code: code.as_str().to_owned(),
            clicks: record.clicks,
            created_at: record.created_at,
            is_url: record.is_url,
            raw_display: record.raw_display,
        }
    }
}
