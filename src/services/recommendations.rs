use std::collections::HashMap;

use crate::models::{normalize_title, MovieRecord};

use super::{similarity::SimilarityMatrix, text_index::TermMatrix};

/// Most titles returned per query
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Anything that can suggest titles similar to a given one
///
/// Handlers depend on this trait so tests can substitute a mock.
#[cfg_attr(test, mockall::automock)]
pub trait TitleRecommender: Send + Sync {
    /// Display titles most similar to `title`; empty when the title is unknown
    fn recommend(&self, title: &str) -> Vec<String>;
}

/// Normalized title to corpus position; the first occurrence of a title wins
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    positions: HashMap<String, usize>,
}

impl TitleIndex {
    pub fn build(normalized_titles: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(normalized_titles.len());
        for (position, title) in normalized_titles.iter().enumerate() {
            positions.entry(title.clone()).or_insert(position);
        }
        Self { positions }
    }

    pub fn position(&self, normalized_title: &str) -> Option<usize> {
        self.positions.get(normalized_title).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Content-based recommender over movie titles
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    titles: Vec<String>,
    index: TitleIndex,
    similarity: SimilarityMatrix,
    limit: usize,
}

impl RecommendationEngine {
    /// Builds the index and similarity matrix for `movies`
    ///
    /// `limit` is capped at [`MAX_RECOMMENDATIONS`].
    pub fn build(movies: &[MovieRecord], limit: usize) -> Self {
        let limit = limit.min(MAX_RECOMMENDATIONS);
        let normalized: Vec<String> = movies.iter().map(MovieRecord::normalized_title).collect();
        let terms = TermMatrix::build(&normalized);
        let similarity = SimilarityMatrix::from_terms(&terms);
        let index = TitleIndex::build(&normalized);

        tracing::info!(
            movies = movies.len(),
            unique_titles = index.len(),
            vocabulary = terms.vocabulary().len(),
            "Recommendation engine ready"
        );

        Self {
            titles: movies.iter().map(|m| m.display_title().to_string()).collect(),
            index,
            similarity,
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Corpus positions ranked by similarity to the movie at `position`
    ///
    /// Ties keep corpus order; the movie itself is excluded.
    fn ranked_neighbours(&self, position: usize) -> Vec<(usize, f32)> {
        let Some(row) = self.similarity.row(position) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
            .into_iter()
            .filter(|(candidate, _)| *candidate != position)
            .take(self.limit)
            .collect()
    }
}

impl TitleRecommender for RecommendationEngine {
    fn recommend(&self, title: &str) -> Vec<String> {
        let Some(position) = self.index.position(&normalize_title(title)) else {
            tracing::debug!(title, "No movie with this title");
            return Vec::new();
        };

        self.ranked_neighbours(position)
            .into_iter()
            .map(|(candidate, _)| self.titles[candidate].clone())
            .collect()
    }
}
