use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{request_id_middleware, request_span};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/shows", get(handlers::list_shows))
        .route("/shows/refresh", post(handlers::refresh_shows))
        .route("/shows/:id", get(handlers::get_show))
        .route("/shows/:id/episodes", get(handlers::get_episodes))
        .route("/genres", get(handlers::list_genres))
        // Grouped views
        .route("/browse", get(handlers::browse))
        .route("/recommended", get(handlers::get_recommended))
        // Watch-list
        .route(
            "/watchlist",
            get(handlers::get_watch_list).post(handlers::add_to_watch_list),
        )
        .route("/watchlist/:id", delete(handlers::remove_from_watch_list))
}
