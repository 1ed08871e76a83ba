use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Release counts
        .route("/cantidad_filmaciones_mes/:mes", get(handlers::releases_by_month))
        .route("/cantidad_filmaciones_dia/:dia", get(handlers::releases_by_weekday))
        // Title lookups
        .route("/score_titulo/:titulo", get(handlers::title_score))
        .route("/votos_titulo/:titulo", get(handlers::title_votes))
        // Credits
        .route("/actor/:nombre", get(handlers::actor))
        .route("/director/:nombre", get(handlers::director))
        // Recommender
        .route("/recomendacion/:titulo", get(handlers::recommend))
        // Lookup tables
        .route("/meses_validos", get(handlers::valid_months))
        .route("/dias_validos", get(handlers::valid_days))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
