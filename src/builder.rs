use std::sync::Arc;
use std::time::Duration;

use crate::cache::ImageCache;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::images::ImageLoader;
use crate::service::{build_client, MealDbService, RecipeService};
use crate::tracker::ErrorTracker;
use crate::view_models::{DessertDetailModel, DessertListModel};

/// Builder for wiring a [`Catalog`] together
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    config: Option<CatalogConfig>,
    base_url: Option<String>,
    category: Option<String>,
    timeout: Option<Duration>,
    image_cache_capacity: Option<usize>,
    tracker: Option<ErrorTracker>,
}

impl CatalogBuilder {
    /// Start from an explicit configuration instead of the defaults
    ///
    /// Individual setters called on the builder still take precedence.
    ///
    /// # Example
    /// ```no_run
    /// use dessertly::{load_config, Catalog};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let catalog = Catalog::builder().config(load_config()?).build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Point the catalog at a different API root
    ///
    /// # Example
    /// ```
    /// use dessertly::Catalog;
    ///
    /// let builder = Catalog::builder().base_url("http://localhost:8080/api/json/v1/1/");
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Browse a category other than desserts
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use dessertly::Catalog;
    /// use std::time::Duration;
    ///
    /// let builder = Catalog::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn image_cache_capacity(mut self, capacity: usize) -> Self {
        self.image_cache_capacity = Some(capacity);
        self
    }

    /// Share an existing error tracker instead of creating a new one
    pub fn tracker(mut self, tracker: ErrorTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Build the catalog
    ///
    /// # Errors
    /// Returns `CatalogError` if the base URL does not parse or the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(category) = self.category {
            config.category = category;
        }
        if let Some(capacity) = self.image_cache_capacity {
            config.image_cache_capacity = capacity;
        }

        // An explicit Duration wins over the whole-second config value
        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(config.timeout));
        let client = build_client(&config, timeout)?;

        let tracker = self.tracker.unwrap_or_default();
        let service: Arc<dyn RecipeService> = Arc::new(MealDbService::with_client(
            client.clone(),
            &config,
            tracker.clone(),
        )?);
        let cache = Arc::new(ImageCache::new(config.image_cache_capacity));
        let images = ImageLoader::new(client, cache);

        Ok(Catalog {
            service,
            tracker,
            images,
            timeout,
        })
    }
}

/// A configured recipe service together with its error tracker and
/// image loader
#[derive(Clone)]
pub struct Catalog {
    service: Arc<dyn RecipeService>,
    tracker: ErrorTracker,
    images: ImageLoader,
    timeout: Duration,
}

impl Catalog {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use dessertly::Catalog;
    ///
    /// let catalog = Catalog::builder().build().unwrap();
    /// ```
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn service(&self) -> Arc<dyn RecipeService> {
        Arc::clone(&self.service)
    }

    pub fn tracker(&self) -> &ErrorTracker {
        &self.tracker
    }

    pub fn images(&self) -> &ImageLoader {
        &self.images
    }

    /// Request timeout applied to both recipe and image fetches
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// A fresh list model backed by this catalog's service
    pub fn list_model(&self) -> DessertListModel {
        DessertListModel::new(self.service(), self.tracker.clone())
    }

    /// A fresh detail model backed by this catalog's service
    pub fn detail_model(&self) -> DessertDetailModel {
        DessertDetailModel::new(self.service(), self.tracker.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_config() {
        let catalog = Catalog::builder()
            .config(CatalogConfig {
                image_cache_capacity: 5,
                ..Default::default()
            })
            .image_cache_capacity(3)
            .build()
            .unwrap();

        assert_eq!(catalog.images().cache().capacity(), 3);
    }

    #[test]
    fn test_builder_keeps_sub_second_timeout() {
        let catalog = Catalog::builder()
            .timeout(Duration::from_millis(1500))
            .build()
            .unwrap();
        assert_eq!(catalog.timeout(), Duration::from_millis(1500));

        let catalog = Catalog::builder()
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap();
        assert_eq!(catalog.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_timeout_defaults_to_config_seconds() {
        let catalog = Catalog::builder()
            .config(CatalogConfig {
                timeout: 7,
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(catalog.timeout(), Duration::from_secs(7));
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let result = Catalog::builder().base_url("not a url").build();
        assert!(matches!(result, Err(CatalogError::InvalidBaseUrl(_))));
    }

    #[tokio::test]
    async fn test_models_share_tracker() {
        let tracker = ErrorTracker::new();
        let catalog = Catalog::builder().tracker(tracker.clone()).build().unwrap();

        catalog
            .tracker()
            .report(crate::error::ServiceError::Unknown)
            .await;
        assert_eq!(
            tracker.current().await,
            Some(crate::error::ServiceError::Unknown)
        );
    }
}
