use std::sync::Arc;

use tether_core::{LinkService, ShortCode};
use url::Url;

#[derive(Clone)]
pub struct AppState {
    links: Arc<dyn LinkService>,
    base_url: String,
}

impl AppState {
    pub fn new(links: Arc<dyn LinkService>, public_base_url: impl Into<String>) -> Self {
        Self {
            links,
            base_url: public_base_url.into(),
        }
    }

    pub fn links(&self) -> &dyn LinkService {
        self.links.as_ref()
    }

    /// Full public URL of a short code.
    ///
    /// Each `/`-separated part of the code is percent-encoded as a path
    /// segment, so the URL routes back to the same code.
    pub fn short_url(&self, code: &ShortCode) -> String {
        let Ok(mut url) = Url::parse(&self.base_url) else {
            return code.to_url(&self.base_url);
        };

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(code.as_str().split('/'));
        }

        url.into()
    }
}
