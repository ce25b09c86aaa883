use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_GENERATE_ATTEMPTS: u32 = 10;
pub const DEFAULT_CAS_MAX_ATTEMPTS: u32 = 16;

/// How `resolve` writes back the incremented click counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickConsistency {
    /// Plain read-modify-write. Concurrent resolutions of the same code
    /// may lose increments.
    #[default]
    LastWriterWins,
    /// Read-modify-write retried through the store's compare-and-swap
    /// until it lands or `max_attempts` is exhausted.
    CompareAndSwap { max_attempts: u32 },
}

/// Tunables for [`LinkStoreService`](crate::LinkStoreService).
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct ServiceSettings {
    /// How many generated candidates are checked against the store before
    /// the last one is written regardless of collision.
    #[builder(default = DEFAULT_MAX_GENERATE_ATTEMPTS)]
    pub max_generate_attempts: u32,
    #[builder(default)]
    pub click_consistency: ClickConsistency,
    /// Leading path segments that may not start a short code, such as the
    /// routes a front end serves next to the links.
    #[builder(default)]
    pub reserved_codes: Vec<String>,
}

impl ServiceSettings {
    /// Whether the first `/`-separated segment of `code` is reserved.
    pub fn is_reserved(&self, code: &str) -> bool {
        let head = code.split('/').next().unwrap_or_default();
        self.reserved_codes.iter().any(|reserved| reserved == head)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
