use crate::codec;
use crate::settings::{ClickConsistency, ServiceSettings};
use async_trait::async_trait;
use std::sync::Arc;
use tether_core::{
    CreateParams, Created, KvStore, LinkError, LinkRecord, LinkService, ShortCode, StatsView,
    StorageError,
};
use tether_generator::{is_valid_url, Generator};
use tracing::{debug, info, trace, warn};

type Result<T> = std::result::Result<T, LinkError>;

/// A concrete implementation of the [`LinkService`] trait.
///
/// This service wraps a [`KvStore`] and a [`Generator`] to handle:
/// - Short code selection (custom, or generated with bounded collision retry)
/// - Content classification (URL or text) at creation
/// - Click counting on resolution
///
/// The service keeps no state between requests; any number of instances
/// may share one store.
#[derive(Debug, Clone)]
pub struct LinkStoreService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    settings: ServiceSettings,
}

impl<S: KvStore, G: Generator> LinkStoreService<S, G> {
    /// Creates a new `LinkStoreService` with default settings.
    pub fn new(store: S, generator: G) -> Self {
        Self::with_settings(store, generator, ServiceSettings::default())
    }

    pub fn with_settings(store: S, generator: G, settings: ServiceSettings) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            settings,
        }
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.store.get(code.as_str()).await?.is_some())
    }

    /// Fetches the raw stored value together with its decoded record.
    async fn load(&self, code: &ShortCode) -> Result<(String, LinkRecord)> {
        trace!(code = %code, "loading link record");

        let Some(raw) = self.store.get(code.as_str()).await? else {
            trace!(code = %code, "short code not found");
            return Err(LinkError::NotFound(code.to_string()));
        };

        let record = codec::decode(&raw).map_err(|e| {
            warn!(code = %code, error = %e, "stored link record is invalid");
            e
        })?;

        Ok((raw, record))
    }

    /// Picks a generated code that is free in the store.
    ///
    /// After `max_generate_attempts` colliding candidates the last one is
    /// returned anyway, and the subsequent write replaces whatever record
    /// holds that code.
    async fn acquire_generated_code(&self) -> Result<ShortCode> {
        let attempts = self.settings.max_generate_attempts.max(1);
        let mut candidate: ShortCode = self.generator.generate().into();

        for attempt in 1..=attempts {
            if !self.settings.is_reserved(candidate.as_str()) && !self.exists(&candidate).await? {
                return Ok(candidate);
            }

            debug!(code = %candidate, attempt, "generated short code already taken");
            if attempt < attempts {
                candidate = self.generator.generate().into();
            }
        }

        warn!(
            code = %candidate,
            attempts,
            "collision-retry ceiling reached, existing record will be overwritten"
        );
        Ok(candidate)
    }

    async fn increment_last_writer_wins(&self, code: &ShortCode) -> Result<LinkRecord> {
        let (_, mut record) = self.load(code).await?;
        record.clicks = record.clicks.saturating_add(1);

        self.store.put(code.as_str(), codec::encode(&record)?).await?;

        Ok(record)
    }

    async fn increment_compare_and_swap(
        &self,
        code: &ShortCode,
        max_attempts: u32,
    ) -> Result<LinkRecord> {
        let max_attempts = max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let (raw, mut record) = self.load(code).await?;
            record.clicks = record.clicks.saturating_add(1);

            if self
                .store
                .compare_and_swap(code.as_str(), &raw, codec::encode(&record)?)
                .await?
            {
                return Ok(record);
            }

            debug!(code = %code, attempt, "click increment lost a race, retrying");
        }

        warn!(code = %code, max_attempts, "click increment gave up under contention");
        Err(LinkError::Store(StorageError::Operation(format!(
            "click increment on '{code}' contended after {max_attempts} attempts"
        ))))
    }
}

#[async_trait]
impl<S: KvStore, G: Generator> LinkService for LinkStoreService<S, G> {
    async fn create(&self, params: CreateParams) -> Result<Created> {
        let content = params.content.trim();
        if content.is_empty() {
            return Err(LinkError::EmptyContent);
        }

        let custom_code = params
            .custom_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty());

        let short_code = match custom_code {
            Some(code) => {
                let code = ShortCode::custom(code)?;
                if self.settings.is_reserved(code.as_str()) {
                    debug!(code = %code, "custom short code is reserved");
                    return Err(LinkError::InvalidShortCode(format!("'{code}' is reserved")));
                }
                if self.exists(&code).await? {
                    debug!(code = %code, "custom short code already taken");
                    return Err(LinkError::CodeTaken(code.to_string()));
                }
                code
            }
            None => self.acquire_generated_code().await?,
        };

        let record = LinkRecord::new(content, is_valid_url(content), params.raw_display);

        self.store
            .put(short_code.as_str(), codec::encode(&record)?)
            .await
            .map_err(|e| {
                warn!(code = %short_code, error = %e, "failed to store link record");
                e
            })?;

        info!(
            code = %short_code,
            is_url = record.is_url,
            raw_display = record.raw_display,
            "created short link"
        );

        Ok(Created { short_code, record })
    }

    async fn resolve(&self, code: &ShortCode) -> Result<LinkRecord> {
        let record = match self.settings.click_consistency {
            ClickConsistency::LastWriterWins => self.increment_last_writer_wins(code).await?,
            ClickConsistency::CompareAndSwap { max_attempts } => {
                self.increment_compare_and_swap(code, max_attempts).await?
            }
        };

        debug!(code = %code, clicks = record.clicks, "resolved short code");
        Ok(record)
    }

    async fn stats(&self, code: &ShortCode) -> Result<StatsView> {
        let (_, record) = self.load(code).await?;
        Ok(StatsView::new(code, &record))
    }
}
