use crate::cache::ImageCache;
use crate::error::ServiceError;
use crate::service::get_bytes;
use bytes::Bytes;
use log::{debug, warn};
use reqwest::{Client, Url};
use std::sync::Arc;

/// Fetches image bytes, consulting an [`ImageCache`] first.
///
/// Failures are logged and returned; they are not sent to the error tracker.
#[derive(Clone)]
pub struct ImageLoader {
    client: Client,
    cache: Arc<ImageCache>,
}

impl ImageLoader {
    pub fn new(client: Client, cache: Arc<ImageCache>) -> Self {
        Self { client, cache }
    }

    #[doc(hidden)]
    pub fn with_cache(cache: Arc<ImageCache>) -> Self {
        Self::new(Client::new(), cache)
    }

    pub fn cache(&self) -> &Arc<ImageCache> {
        &self.cache
    }

    /// Return the image at `url`, fetching and caching it on a miss
    pub async fn load(&self, url: &str) -> Result<Bytes, ServiceError> {
        if let Some(bytes) = self.cache.get(url) {
            debug!("Image cache hit for {}", url);
            return Ok(bytes);
        }

        let parsed = Url::parse(url).map_err(|e| {
            warn!("Invalid image URL '{}': {}", url, e);
            ServiceError::InvalidUrl
        })?;

        let bytes = get_bytes(&self.client, parsed).await.inspect_err(|e| {
            warn!("Failed to load image {}: {}", url, e);
        })?;

        self.cache.put(url, bytes.clone());
        Ok(bytes)
    }
}
