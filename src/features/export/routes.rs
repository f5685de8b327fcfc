use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::export::handlers;
use crate::features::export::services::ExportService;

/// Create routes for the export feature
///
/// Note: The export password is checked by the client only; this route is
/// not authenticated.
pub fn routes(service: Arc<ExportService>) -> Router {
    Router::new()
        .route("/api/export", get(handlers::export_data))
        .with_state(service)
}
