mod http;
mod mealdb;

pub use mealdb::MealDbService;

pub(crate) use http::{build_client, get_bytes};

use crate::error::ServiceError;
use crate::model::{RecipeDetail, RecipeSummary};
use async_trait::async_trait;

/// Source of recipe summaries and details
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Fetch every recipe summary in the configured category, sorted by name
    async fn fetch_summaries(&self) -> Result<Vec<RecipeSummary>, ServiceError>;

    /// Fetch the full record for one recipe
    async fn fetch_detail(&self, id: &str) -> Result<RecipeDetail, ServiceError>;
}
