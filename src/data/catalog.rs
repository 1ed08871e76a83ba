use std::collections::HashMap;

use anyhow::Context;

use crate::{
    config::Config,
    models::{CastCredit, CrewCredit, MovieRecord},
};

use super::loader;

/// Immutable in-memory tables backing every query endpoint
///
/// Movie positions are stable for the lifetime of the catalog; the
/// recommender refers to films by position.
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
    cast: Vec<CastCredit>,
    crew: Vec<CrewCredit>,
    positions_by_id: HashMap<i64, Vec<usize>>,
}

impl Catalog {
    pub fn new(movies: Vec<MovieRecord>, cast: Vec<CastCredit>, crew: Vec<CrewCredit>) -> Self {
        let mut positions_by_id: HashMap<i64, Vec<usize>> = HashMap::new();
        for (position, movie) in movies.iter().enumerate() {
            if let Some(id) = movie.id {
                positions_by_id.entry(id).or_default().push(position);
            }
        }

        Self {
            movies,
            cast,
            crew,
            positions_by_id,
        }
    }

    /// Loads all three tables from the paths in the config
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let (movies, _) = loader::load_movies(&config.movies_path)
            .with_context(|| format!("Failed to load movies from {}", config.movies_path))?;
        let (cast, _) = loader::load_cast(&config.cast_path)
            .with_context(|| format!("Failed to load cast from {}", config.cast_path))?;
        let (crew, _) = loader::load_crew(&config.crew_path)
            .with_context(|| format!("Failed to load crew from {}", config.crew_path))?;
        Ok(Self::new(movies, cast, crew))
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn cast(&self) -> &[CastCredit] {
        &self.cast
    }

    pub fn crew(&self) -> &[CrewCredit] {
        &self.crew
    }

    /// All movies sharing the given id, in corpus order
    pub fn movies_with_id(&self, id: i64) -> impl Iterator<Item = &MovieRecord> {
        self.positions_by_id
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&position| &self.movies[position])
    }
}
