use crate::error::LinkError;
use crate::record::{LinkRecord, StatsView};
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, LinkError>;

/// Parameters for creating a link.
#[derive(Debug, Clone, Default)]
pub struct CreateParams {
    /// The text or URL to store. Trimmed before use.
    pub content: String,
    /// Optional caller-chosen code. Blank values mean "generate one".
    pub custom_code: Option<String>,
    /// Emit content as plain text instead of redirecting or rendering a page.
    pub raw_display: bool,
}

/// The outcome of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub short_code: ShortCode,
    pub record: LinkRecord,
}

#[async_trait]
pub trait LinkService: Send + Sync + 'static {
    /// Stores new content under a fresh or caller-chosen short code.
    async fn create(&self, params: CreateParams) -> Result<Created>;

    /// Looks up a code, increments its click counter and returns the updated record.
    async fn resolve(&self, code: &ShortCode) -> Result<LinkRecord>;

    /// Looks up a code without touching its click counter.
    async fn stats(&self, code: &ShortCode) -> Result<StatsView>;
}
