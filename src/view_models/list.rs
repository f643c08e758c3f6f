use crate::model::RecipeSummary;
use crate::service::RecipeService;
use crate::tracker::ErrorTracker;
use log::debug;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct ListState {
    all: Vec<RecipeSummary>,
    filtered: Vec<RecipeSummary>,
    query: String,
    is_loading: bool,
    error_message: Option<String>,
    generation: u64,
}

/// Holds the fetched recipe list and a search-filtered view of it
pub struct DessertListModel {
    service: Arc<dyn RecipeService>,
    tracker: ErrorTracker,
    state: RwLock<ListState>,
}

impl DessertListModel {
    pub fn new(service: Arc<dyn RecipeService>, tracker: ErrorTracker) -> Self {
        Self {
            service,
            tracker,
            state: RwLock::new(ListState {
                all: Vec::new(),
                filtered: Vec::new(),
                query: String::new(),
                is_loading: true,
                error_message: None,
                generation: 0,
            }),
        }
    }

    /// Fetch the recipe list and rebuild the filtered view.
    ///
    /// On failure the previous list is discarded and an error message is
    /// stored instead.
    pub async fn load(&self) {
        let ticket = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.is_loading = true;
            state.error_message = None;
            state.generation
        };

        let result = self.service.fetch_summaries().await;
        if let Err(error) = &result {
            self.tracker.report(*error).await;
        }

        let mut guard = self.state.write().await;
        let state = &mut *guard;
        if state.generation != ticket {
            debug!("Discarding recipe list from superseded load {}", ticket);
            return;
        }

        match result {
            Ok(summaries) => {
                state.all = summaries;
                state.filtered = filter_summaries(&state.all, &state.query);
            }
            Err(error) => {
                state.all.clear();
                state.filtered.clear();
                state.error_message = Some(error.to_string());
            }
        }
        state.is_loading = false;
    }

    /// Replace the search query and recompute the filtered view
    pub async fn set_query(&self, query: impl Into<String>) {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        state.query = query.into();
        state.filtered = filter_summaries(&state.all, &state.query);
    }

    pub async fn all(&self) -> Vec<RecipeSummary> {
        self.state.read().await.all.clone()
    }

    pub async fn filtered(&self) -> Vec<RecipeSummary> {
        self.state.read().await.filtered.clone()
    }

    pub async fn query(&self) -> String {
        self.state.read().await.query.clone()
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

/// Summaries whose name contains `query`, ignoring case.
///
/// An empty query returns every summary in its original order.
pub fn filter_summaries(summaries: &[RecipeSummary], query: &str) -> Vec<RecipeSummary> {
    if query.is_empty() {
        return summaries.to_vec();
    }

    let needle = query.to_lowercase();
    summaries
        .iter()
        .filter(|summary| summary.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
