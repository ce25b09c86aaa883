use crate::error::LinkError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The key identifying a stored link record.
///
/// Generated codes only contain `[A-Za-z0-9]`. Custom codes may be any
/// non-empty trimmed string of at most 20 characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortCode {
    /// A code produced by a generator.
    Generated(String),
    /// A caller-supplied code.
    Custom(String),
}

/// Maximum length of a custom short code, in characters.
pub const MAX_CUSTOM_LENGTH: usize = 20;

impl ShortCode {
    /// Wraps a generator-produced code.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. the random generator), no validation is performed.
    pub fn generated(code: impl Into<String>) -> Self {
        Self::Generated(code.into())
    }

    /// Creates a custom `ShortCode` after trimming and validating the input.
    pub fn custom(code: impl AsRef<str>) -> std::result::Result<Self, LinkError> {
        let code = code.as_ref().trim();
        Self::validate(code)?;
        Ok(Self::Custom(code.to_owned()))
    }

    /// Creates a `ShortCode` for a lookup key taken verbatim from a request.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self::Custom(code.into())
    }

    /// Generates the full short-link URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            ShortCode::Generated(s) | ShortCode::Custom(s) => s.as_str(),
        }
    }

    fn validate(code: &str) -> std::result::Result<(), LinkError> {
        if code.is_empty() {
            return Err(LinkError::InvalidShortCode(
                "short code cannot be empty".to_string(),
            ));
        }

        let length = code.chars().count();
        if length > MAX_CUSTOM_LENGTH {
            return Err(LinkError::InvalidShortCode(format!(
                "length must be at most {}, got {}",
                MAX_CUSTOM_LENGTH, length
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
