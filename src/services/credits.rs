use chrono::NaiveDate;
use serde::Serialize;

use crate::{data::Catalog, models::MovieRecord};

/// Aggregate return over the films an actor appears in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorStats {
    pub film_count: usize,
    pub total_return: f64,
    pub average_return: f64,
}

/// One directed film with its financials
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectedFilm {
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub return_ratio: f64,
    pub budget: f64,
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorStats {
    pub film_count: usize,
    pub total_return: f64,
    pub films: Vec<DirectedFilm>,
}

/// Movies joined to a credit; an unmatched credit still yields one row
fn joined_rows(catalog: &Catalog, id: Option<i64>) -> Vec<Option<&MovieRecord>> {
    let matched: Vec<Option<&MovieRecord>> = id
        .map(|id| catalog.movies_with_id(id).map(Some).collect())
        .unwrap_or_default();
    if matched.is_empty() {
        vec![None]
    } else {
        matched
    }
}

/// Return statistics for credits whose actor name equals `name` exactly
///
/// `None` when the actor has no credits at all.
pub fn actor_stats(catalog: &Catalog, name: &str) -> Option<ActorStats> {
    let credits: Vec<_> = catalog
        .cast()
        .iter()
        .filter(|credit| credit.name.as_deref() == Some(name))
        .collect();
    if credits.is_empty() {
        return None;
    }

    let rows: Vec<Option<&MovieRecord>> = credits
        .iter()
        .flat_map(|credit| joined_rows(catalog, credit.id))
        .collect();

    let film_count = rows.len();
    let total_return: f64 = rows
        .iter()
        .filter_map(|movie| movie.and_then(|m| m.return_ratio))
        .sum();
    let average_return = if film_count > 0 {
        total_return / film_count as f64
    } else {
        0.0
    };

    Some(ActorStats {
        film_count,
        total_return,
        average_return,
    })
}

/// Return statistics for directors whose name contains `fragment`
///
/// Films lacking a title, budget or return are left out of both the count
/// and the total. `None` when no director credit matches.
pub fn director_stats(catalog: &Catalog, fragment: &str) -> Option<DirectorStats> {
    let needle = fragment.to_lowercase();
    let credits: Vec<_> = catalog
        .crew()
        .iter()
        .filter(|credit| credit.is_director())
        .filter(|credit| {
            credit
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect();
    if credits.is_empty() {
        return None;
    }

    let films: Vec<DirectedFilm> = credits
        .iter()
        .flat_map(|credit| joined_rows(catalog, credit.id))
        .flatten()
        .filter_map(|movie| {
            Some(DirectedFilm {
                title: movie.title.clone()?,
                release_date: movie.release_date,
                return_ratio: movie.return_ratio?,
                budget: movie.budget?,
                revenue: movie.revenue,
            })
        })
        .collect();

    Some(DirectorStats {
        film_count: films.len(),
        total_return: films.iter().map(|f| f.return_ratio).sum(),
        films,
    })
}
