use crate::model::{IngredientEntry, RecipeDetail};
use crate::service::RecipeService;
use crate::tracker::ErrorTracker;
use log::debug;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct DetailState {
    detail: Option<RecipeDetail>,
    is_loading: bool,
    error_message: Option<String>,
    generation: u64,
}

/// Holds one loaded recipe and produces sorted ingredient lists for it
pub struct DessertDetailModel {
    service: Arc<dyn RecipeService>,
    tracker: ErrorTracker,
    state: RwLock<DetailState>,
}

impl DessertDetailModel {
    pub fn new(service: Arc<dyn RecipeService>, tracker: ErrorTracker) -> Self {
        Self {
            service,
            tracker,
            state: RwLock::new(DetailState {
                detail: None,
                is_loading: true,
                error_message: None,
                generation: 0,
            }),
        }
    }

    /// Fetch the recipe with the given id, replacing any previous one.
    pub async fn load(&self, id: &str) {
        let ticket = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.is_loading = true;
            state.error_message = None;
            state.generation
        };

        let result = self.service.fetch_detail(id).await;
        if let Err(error) = &result {
            self.tracker.report(*error).await;
        }

        let mut state = self.state.write().await;
        if state.generation != ticket {
            debug!("Discarding recipe '{}' from superseded load", id);
            return;
        }

        match result {
            Ok(detail) => state.detail = Some(detail),
            Err(error) => {
                state.detail = None;
                state.error_message = Some(error.to_string());
            }
        }
        state.is_loading = false;
    }

    /// The loaded recipe's ingredients ordered by name, ignoring case.
    ///
    /// Empty when no recipe is loaded.
    pub async fn sort_ingredients(&self, ascending: bool) -> Vec<IngredientEntry> {
        self.state
            .read()
            .await
            .detail
            .as_ref()
            .map(|detail| detail.sorted_ingredients(ascending))
            .unwrap_or_default()
    }

    pub async fn detail(&self) -> Option<RecipeDetail> {
        self.state.read().await.detail.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    pub async fn error_message(&self) -> Option<String> {
        self.state.read().await.error_message.clone()
    }

    pub async fn has_error(&self) -> bool {
        self.state.read().await.error_message.is_some()
    }
}
