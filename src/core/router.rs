use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;

use crate::core::config::{ExportConfig, UploadConfig};
use crate::features::export::{routes as export_routes, ExportService};
use crate::features::files::{routes as files_routes, FileService};
use crate::features::tutorials::{routes as tutorials_routes, TutorialService};
use crate::modules::storage::Storage;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Build the API router on top of a shared storage backend.
///
/// Cross-cutting layers (tracing, CORS, request ids) and the Swagger UI are
/// added by the caller.
pub fn build_router(
    storage: Arc<dyn Storage>,
    upload: UploadConfig,
    export: ExportConfig,
) -> Router {
    let file_service = Arc::new(FileService::new(Arc::clone(&storage), upload));
    let tutorial_service = Arc::new(TutorialService::new(Arc::clone(&storage)));
    let export_service = Arc::new(ExportService::new(storage, export));
    tracing::debug!("Feature services initialized");

    Router::new()
        .merge(files_routes(file_service))
        .merge(tutorials_routes(tutorial_service))
        .merge(export_routes(export_service))
        .route("/health", get(health_check))
}
