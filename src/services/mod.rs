pub mod credits;
pub mod recommendations;
pub mod release_stats;
pub mod similarity;
pub mod stop_words;
pub mod text_index;
pub mod title_search;

pub use recommendations::{RecommendationEngine, TitleRecommender};
