//! HTTP service for Hugo Hotel room management.
//!
//! Room CRUD over an in-memory store plus an on-demand PDF export of a
//! room's details, backed by the `hugo` exporter.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, put},
};
use state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/rooms",
            get(handlers::list_rooms).post(handlers::create_room),
        )
        .route(
            "/api/rooms/:id",
            put(handlers::update_room)
                .get(handlers::get_room)
                .delete(handlers::delete_room),
        )
        .route("/api/rooms/:id/pdf", get(handlers::export_room_pdf))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
