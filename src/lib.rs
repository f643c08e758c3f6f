//! Client for browsing dessert recipes from TheMealDB.
//!
//! The crate fetches the recipe list and individual recipe records, decodes
//! the API's numbered ingredient fields into a plain map, caches image bytes
//! and keeps list/detail state for a UI layer to render.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = dessertly::Catalog::builder().build()?;
//!
//! let list = catalog.list_model();
//! list.load().await;
//! list.set_query("tart").await;
//! for summary in list.filtered().await {
//!     println!("{} ({})", summary.name, summary.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cache;
pub mod config;
pub mod decoders;
pub mod error;
pub mod images;
pub mod model;
pub mod service;
pub mod tracker;
pub mod view_models;

pub use builder::{Catalog, CatalogBuilder};
pub use cache::ImageCache;
pub use config::{load_config, CatalogConfig};
pub use error::{CatalogError, ServiceError};
pub use images::ImageLoader;
pub use model::{sort_ingredients, IngredientEntry, RecipeDetail, RecipeSummary};
pub use service::{MealDbService, RecipeService};
pub use tracker::ErrorTracker;
pub use view_models::{DessertDetailModel, DessertListModel};

/// Fetch the dessert list using configuration from `config.toml` and
/// `DESSERTLY__*` environment variables.
pub async fn fetch_desserts() -> Result<Vec<RecipeSummary>, CatalogError> {
    let catalog = Catalog::builder().config(load_config()?).build()?;
    Ok(catalog.service().fetch_summaries().await?)
}

/// Fetch one recipe by id using configuration from `config.toml` and
/// `DESSERTLY__*` environment variables.
pub async fn fetch_dessert(id: &str) -> Result<RecipeDetail, CatalogError> {
    let catalog = Catalog::builder().config(load_config()?).build()?;
    Ok(catalog.service().fetch_detail(id).await?)
}
