use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::export::dtos::ExportDocumentDto;
use crate::features::export::services::ExportService;

/// Download a JSON export of all files and tutorials
///
/// The document is serialized in full before the response starts, so a
/// failure never leaves a truncated body.
#[utoipa::path(
    get,
    path = "/api/export",
    tag = "export",
    responses(
        (status = 200, description = "Export document", body = ExportDocumentDto),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn export_data(State(service): State<Arc<ExportService>>) -> Result<Response> {
    let document = service.build().await?;

    let body = serde_json::to_vec(&document)
        .map_err(|e| AppError::Internal(format!("Failed to serialize export: {}", e)))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", service.filename()),
        )
        .body(Body::from(body))
        .map_err(|e| AppError::Internal(format!("Failed to build export response: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::test_server;
    use axum::http::header;
    use axum_test::multipart::{MultipartForm, Part};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_export_document() {
        let server = test_server();

        for (model, name) in [("E46", "a.bin"), ("E46", "b.xdf"), ("E92", "c.a2l")] {
            let form = MultipartForm::new()
                .add_text("bmwModel", model)
                .add_text("motor", "S65")
                .add_part("file", Part::bytes(vec![1u8, 2]).file_name(name));
            server.post("/api/files").multipart(form).await;
        }
        server
            .post("/api/tutorials")
            .json(&json!({
                "title": "Intro",
                "youtubeUrl": "https://youtu.be/intro1",
                "category": "basic"
            }))
            .await;

        let response = server.get("/api/export").await;
        response.assert_status_ok();
        assert_eq!(
            response.header(header::CONTENT_DISPOSITION),
            "attachment; filename=\"bmw-me9-export.json\""
        );

        let document: Value = response.json();
        assert_eq!(document["platform"], "BMW ME9.2 Steuergeräte Platform");
        assert_eq!(document["version"], "1.0");
        assert!(document["exportDate"].is_string());
        assert_eq!(document["statistics"]["totalFiles"], 3);
        assert_eq!(document["statistics"]["totalTutorials"], 1);
        assert_eq!(
            document["statistics"]["filesByModel"],
            json!({ "E46": 2, "E92": 1 })
        );
        assert_eq!(
            document["statistics"]["tutorialsByCategory"],
            json!({ "basic": 1 })
        );

        let first_file = &document["data"]["files"][0];
        assert_eq!(first_file["originalName"], "c.a2l");
        assert!(first_file.get("filename").is_none());
        assert!(first_file["description"].is_null());
        assert_eq!(document["data"]["tutorials"][0]["youtubeId"], "intro1");
    }
}
