use super::{build_client, get_bytes, RecipeService};
use crate::config::CatalogConfig;
use crate::decoders::decode_detail;
use crate::error::{CatalogError, ServiceError};
use crate::model::{RecipeDetail, RecipeSummary};
use crate::tracker::ErrorTracker;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

const LIST_ENDPOINT: &str = "filter.php";
const LOOKUP_ENDPOINT: &str = "lookup.php";

/// `{ "meals": [...] }` envelope shared by both endpoints.
///
/// The key must be present; the API sends `null` instead of an empty list
/// when nothing matches.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct MealsResponse<T> {
    #[serde(deserialize_with = "Option::deserialize")]
    meals: Option<Vec<T>>,
}

/// [`RecipeService`] backed by TheMealDB's JSON API.
///
/// Every failure is reported to the injected [`ErrorTracker`] before it is
/// returned.
pub struct MealDbService {
    client: Client,
    base_url: String,
    category: String,
    tracker: ErrorTracker,
}

impl MealDbService {
    /// Create a service from configuration
    pub fn new(config: &CatalogConfig, tracker: ErrorTracker) -> Result<Self, CatalogError> {
        let client = build_client(config, Duration::from_secs(config.timeout))?;
        Self::with_client(client, config, tracker)
    }

    /// Create a service that sends requests through an existing client
    pub(crate) fn with_client(
        client: Client,
        config: &CatalogConfig,
        tracker: ErrorTracker,
    ) -> Result<Self, CatalogError> {
        let base_url = normalize_base_url(&config.base_url);
        Url::parse(&base_url)
            .map_err(|e| CatalogError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(MealDbService {
            client,
            base_url,
            category: config.category.clone(),
            tracker,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>, tracker: ErrorTracker) -> Self {
        MealDbService {
            client: Client::new(),
            base_url: normalize_base_url(&base_url.into()),
            category: "Dessert".to_string(),
            tracker,
        }
    }

    /// Join `endpoint` onto the base URL and append the query pairs
    fn make_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url, ServiceError> {
        let base = Url::parse(&self.base_url).map_err(|_| ServiceError::InvalidUrl)?;
        let mut url = base.join(endpoint).map_err(|_| ServiceError::InvalidUrl)?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url)
    }

    async fn load_summaries(&self) -> Result<Vec<RecipeSummary>, ServiceError> {
        let url = self.make_url(LIST_ENDPOINT, &[("c", self.category.as_str())])?;
        let body = get_bytes(&self.client, url).await?;

        let response: MealsResponse<RecipeSummary> = serde_json::from_slice(&body)?;
        let mut summaries = response.meals.unwrap_or_default();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));

        info!(
            "Fetched {} recipes in category '{}'",
            summaries.len(),
            self.category
        );
        Ok(summaries)
    }

    async fn load_detail(&self, id: &str) -> Result<RecipeDetail, ServiceError> {
        let url = self.make_url(LOOKUP_ENDPOINT, &[("i", id)])?;
        let body = get_bytes(&self.client, url).await?;

        let response: MealsResponse<Map<String, Value>> = serde_json::from_slice(&body)?;
        let record = response
            .meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or_else(|| {
                debug!("No recipe found for id '{}'", id);
                ServiceError::BadServerResponse
            })?;

        decode_detail(&record)
    }

    async fn track<T>(&self, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
        if let Err(error) = &result {
            warn!("Recipe service failure: {}", error);
            self.tracker.report(*error).await;
        }
        result
    }
}

#[async_trait]
impl RecipeService for MealDbService {
    async fn fetch_summaries(&self) -> Result<Vec<RecipeSummary>, ServiceError> {
        let result = self.load_summaries().await;
        self.track(result).await
    }

    async fn fetch_detail(&self, id: &str) -> Result<RecipeDetail, ServiceError> {
        let result = self.load_detail(id).await;
        self.track(result).await
    }
}

fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    }
}
