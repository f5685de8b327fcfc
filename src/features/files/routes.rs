use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::features::files::handlers::{delete_file, download_file, list_files, upload_file};
use crate::features::files::services::FileService;

/// Headroom for multipart boundaries and the text fields sent with the file
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Create routes for the files feature
pub fn routes(file_service: Arc<FileService>) -> Router {
    let body_limit = file_service.max_file_size() + MULTIPART_OVERHEAD;

    Router::new()
        .route(
            "/api/files",
            get(list_files)
                .post(upload_file)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/files/{id}/download", get(download_file))
        .route("/api/files/{id}", delete(delete_file))
        .with_state(file_service)
}
