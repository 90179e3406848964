use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1, one per query operation
fn api_routes() -> Router<AppState> {
    Router::new()
        // Playtime analytics
        .route(
            "/playtime/genres/:genre/peak-year",
            get(handlers::peak_year_for_genre),
        )
        .route(
            "/playtime/genres/:genre/top-user",
            get(handlers::top_user_for_genre),
        )
        // Review analytics
        .route("/reviews/:year/top", get(handlers::top_games))
        .route("/reviews/:year/bottom", get(handlers::bottom_games))
        .route("/reviews/:year/sentiment", get(handlers::sentiment_counts))
        // Recommendations
        .route("/games/:name/similar", get(handlers::similar_games))
}
