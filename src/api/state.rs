use std::sync::Arc;

use crate::{data::Catalog, services::TitleRecommender};

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<dyn TitleRecommender>,
    /// Votes a title needs before its rating is reported
    pub min_vote_count: u64,
}

impl AppState {
    pub fn new(catalog: Catalog, recommender: Arc<dyn TitleRecommender>, min_vote_count: u64) -> Self {
        Self {
            catalog: Arc::new(catalog),
            recommender,
            min_vote_count,
        }
    }
}
