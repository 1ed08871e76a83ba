use crate::models::{normalize_title, MovieRecord};

/// First movie, in corpus order, whose title contains `fragment`
///
/// Matching is a case-insensitive literal substring test. Movies without a
/// title never match.
pub fn find_by_title<'a>(movies: &'a [MovieRecord], fragment: &str) -> Option<&'a MovieRecord> {
    let needle = normalize_title(fragment);
    movies.iter().find(|movie| {
        movie
            .title
            .as_deref()
            .is_some_and(|title| normalize_title(title).contains(&needle))
    })
}
