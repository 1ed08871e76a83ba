use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::calendar::{month_from_name, weekday_from_name, DAY_NAMES, MONTH_NAMES},
    services::{credits, release_stats, title_search},
};

use super::AppState;

// Response types

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub titulo: String,
    #[serde(rename = "año_de_estreno")]
    pub ano_de_estreno: Option<i32>,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct VotesResponse {
    pub mensaje: String,
    pub titulo: String,
    pub total_valoraciones: u64,
    pub promedio_valoraciones: f64,
}

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub actor: String,
    pub cantidad_peliculas: usize,
    pub retorno_total: f64,
    pub promedio_retorno: f64,
}

#[derive(Debug, Serialize)]
pub struct DirectedFilmResponse {
    pub titulo: String,
    pub release_date: Option<NaiveDate>,
    #[serde(rename = "return")]
    pub return_ratio: f64,
    pub budget: f64,
    pub revenue: Option<f64>,
}

impl From<credits::DirectedFilm> for DirectedFilmResponse {
    fn from(film: credits::DirectedFilm) -> Self {
        Self {
            titulo: film.title,
            release_date: film.release_date,
            return_ratio: film.return_ratio,
            budget: film.budget,
            revenue: film.revenue,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DirectorResponse {
    pub director: String,
    pub cantidad_peliculas: usize,
    pub retorno_total: f64,
    pub peliculas: Vec<DirectedFilmResponse>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recomendaciones: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Number of movies released in a month, given its Spanish name
pub async fn releases_by_month(
    State(state): State<AppState>,
    Path(mes): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let month = month_from_name(&mes).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "Mes no válido. Los meses válidos son: {}",
            MONTH_NAMES.join(", ")
        ))
    })?;

    let tally = release_stats::count_releases_in_month(state.catalog.movies(), month);
    tracing::debug!(month, count = tally.count, skipped = tally.skipped, "Counted releases by month");

    Ok(Json(MessageResponse {
        message: format!(
            "{} cantidad de películas fueron estrenadas en el mes de {}",
            tally.count, mes
        ),
    }))
}

/// Number of movies released on a weekday, given its Spanish name
pub async fn releases_by_weekday(
    State(state): State<AppState>,
    Path(dia): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let weekday = weekday_from_name(&dia).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "Día no válido. Los días válidos son: {}",
            DAY_NAMES.join(", ")
        ))
    })?;

    let tally = release_stats::count_releases_on_weekday(state.catalog.movies(), weekday);
    tracing::debug!(%weekday, count = tally.count, skipped = tally.skipped, "Counted releases by weekday");

    Ok(Json(MessageResponse {
        message: format!(
            "{} cantidad de películas fueron estrenadas en los días {}",
            tally.count, dia
        ),
    }))
}

/// Title, release year and popularity of the first matching movie
pub async fn title_score(
    State(state): State<AppState>,
    Path(titulo): Path<String>,
) -> AppResult<Json<ScoreResponse>> {
    let movie = title_search::find_by_title(state.catalog.movies(), &titulo)
        .ok_or_else(|| AppError::NotFound("Película no encontrada".to_string()))?;

    Ok(Json(ScoreResponse {
        titulo: movie.display_title().to_string(),
        ano_de_estreno: movie.release_year(),
        score: movie.popularity,
    }))
}

/// Vote count and average of the first matching movie
///
/// Titles with fewer votes than the configured minimum are rejected.
pub async fn title_votes(
    State(state): State<AppState>,
    Path(titulo): Path<String>,
) -> AppResult<Json<VotesResponse>> {
    let movie = title_search::find_by_title(state.catalog.movies(), &titulo)
        .ok_or_else(|| AppError::NotFound("Película no encontrada".to_string()))?;

    if movie.vote_count < state.min_vote_count {
        return Err(AppError::InvalidInput(format!(
            "La película no cumple con el requisito mínimo de {} valoraciones",
            state.min_vote_count
        )));
    }

    let title = movie.display_title().to_string();
    Ok(Json(VotesResponse {
        mensaje: format!(
            "La película '{}' cuenta con un total de {} valoraciones, con un promedio de {:.1}.",
            title, movie.vote_count, movie.vote_average
        ),
        titulo: title,
        total_valoraciones: movie.vote_count,
        promedio_valoraciones: movie.vote_average,
    }))
}

/// Return statistics for an actor, matched by exact name
pub async fn actor(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> AppResult<Json<ActorResponse>> {
    let stats = credits::actor_stats(&state.catalog, &nombre)
        .ok_or_else(|| AppError::NotFound("El actor no fue encontrado en el dataset".to_string()))?;

    Ok(Json(ActorResponse {
        actor: nombre,
        cantidad_peliculas: stats.film_count,
        retorno_total: stats.total_return,
        promedio_retorno: stats.average_return,
    }))
}

/// Return statistics and film list for a director, matched by name fragment
pub async fn director(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> AppResult<Json<DirectorResponse>> {
    let stats = credits::director_stats(&state.catalog, &nombre).ok_or_else(|| {
        AppError::NotFound("El director no fue encontrado en el dataset".to_string())
    })?;

    Ok(Json(DirectorResponse {
        director: nombre,
        cantidad_peliculas: stats.film_count,
        retorno_total: stats.total_return,
        peliculas: stats.films.into_iter().map(Into::into).collect(),
    }))
}

/// Titles similar to the given one; unknown titles yield an empty list
pub async fn recommend(
    State(state): State<AppState>,
    Path(titulo): Path<String>,
) -> Json<RecommendationResponse> {
    Json(RecommendationResponse {
        recomendaciones: state.recommender.recommend(&titulo),
    })
}

pub async fn valid_months() -> Json<Value> {
    Json(json!({ "meses_validos": MONTH_NAMES }))
}

pub async fn valid_days() -> Json<Value> {
    Json(json!({ "dias_validos": DAY_NAMES }))
}
