//! HTTP API server

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::storage::UserStore;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .fallback(handlers::not_found),
        )
        .route(
            "/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wrapping a bare store
pub fn create_store_router(store: Arc<dyn UserStore>) -> Router {
    create_router(AppState::new(store))
}
