use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::tutorials::handlers;
use crate::features::tutorials::services::TutorialService;

/// Create routes for the tutorials feature
pub fn routes(service: Arc<TutorialService>) -> Router {
    Router::new()
        .route(
            "/api/tutorials",
            get(handlers::list_tutorials).post(handlers::create_tutorial),
        )
        .route("/api/tutorials/{id}", delete(handlers::delete_tutorial))
        .with_state(service)
}
