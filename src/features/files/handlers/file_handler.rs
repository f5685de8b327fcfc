use axum::{
    body::{Body, Bytes},
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{CreateFileDto, FileResponseDto, ListFilesQuery, UploadFileDto};
use crate::features::files::services::FileService;
use crate::shared::types::{ApiResponse, DeletedDto};
use crate::shared::validation::non_empty;

/// List uploaded files, newest first
#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    params(ListFilesQuery),
    responses(
        (status = 200, description = "Files ordered by upload time, newest first", body = Vec<FileResponseDto>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_files(
    State(service): State<Arc<FileService>>,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<Vec<FileResponseDto>>> {
    let model = non_empty(query.model);
    let files = service.list(model.as_deref()).await?;
    Ok(Json(files))
}

/// Upload a calibration file
///
/// Accepts multipart/form-data with:
/// - `file`: The file to upload (required, .xdf/.bin/.a2l)
/// - `bmwModel`: BMW model tag (required)
/// - `motor`: Engine tag (required)
/// - `description`: Optional free text
#[utoipa::path(
    post,
    path = "/api/files",
    tag = "files",
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
        description = "Calibration file with model and motor tags",
    ),
    responses(
        (status = 201, description = "File uploaded successfully", body = FileResponseDto),
        (status = 400, description = "No file, invalid file type, file too large or invalid fields"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn upload_file(
    State(service): State<Arc<FileService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<FileResponseDto>)> {
    let mut upload: Option<(String, String, Bytes)> = None;
    let mut bmw_model = String::new();
    let mut motor = String::new();
    let mut description: Option<String> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                // A plain text part named "file" carries no upload
                let Some(file_name) = field.file_name().map(str::to_string) else {
                    debug!("Ignoring file field without a filename");
                    continue;
                };

                // Reject disallowed types before buffering the payload
                let file_type = service.check_file_name(&file_name)?;

                let mut data = Vec::new();
                while let Some(chunk) = field.chunk().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })? {
                    service.check_size(data.len() + chunk.len())?;
                    data.extend_from_slice(&chunk);
                }

                upload = Some((file_name, file_type, Bytes::from(data)));
            }
            "bmwModel" | "motor" | "description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read {} field: {}", field_name, e))
                })?;
                match field_name.as_str() {
                    "bmwModel" => bmw_model = text,
                    "motor" => motor = text,
                    _ => description = non_empty(Some(text)),
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let (original_name, file_type, payload) =
        upload.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    let dto = CreateFileDto {
        original_name,
        file_type,
        bmw_model,
        motor,
        description,
        file_size: payload.len() as u64,
    };

    let file = service.upload(dto, payload).await?;

    Ok((StatusCode::CREATED, Json(file)))
}

/// Download the raw content of a file
#[utoipa::path(
    get,
    path = "/api/files/{id}/download",
    tag = "files",
    params(
        ("id" = String, Path, description = "File id")
    ),
    responses(
        (status = 200, description = "File content", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 404, description = "File or file content not found")
    )
)]
pub async fn download_file(
    State(service): State<Arc<FileService>>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_file_id(&id)?;
    let (file, content) = service.download(id).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            attachment_disposition(&file.original_name),
        )
        .header(header::CONTENT_LENGTH, content.len())
        .body(Body::from(content))
        .map_err(|e| AppError::Internal(format!("Failed to build download response: {}", e)))
}

/// Delete a file and its content
#[utoipa::path(
    delete,
    path = "/api/files/{id}",
    tag = "files",
    params(
        ("id" = String, Path, description = "File id")
    ),
    responses(
        (status = 200, description = "File deleted successfully", body = ApiResponse<DeletedDto>),
        (status = 404, description = "File not found")
    )
)]
pub async fn delete_file(
    State(service): State<Arc<FileService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedDto>>> {
    let id = parse_file_id(&id)?;
    service.delete(id).await?;

    Ok(Json(ApiResponse::success(
        Some(DeletedDto { deleted: true }),
        Some("File deleted successfully".to_string()),
    )))
}

/// Ids that are not valid UUIDs cannot name a stored file
fn parse_file_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("File not found".to_string()))
}

/// Build `attachment; filename="..."` for a display name.
///
/// Quotes and backslashes are escaped, control and non-ASCII characters are
/// replaced with '_'. Non-ASCII names also get an RFC 5987 `filename*`.
fn attachment_disposition(name: &str) -> String {
    let mut ascii = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '"' | '\\' => {
                ascii.push('\\');
                ascii.push(c);
            }
            c if c.is_ascii() && !c.is_ascii_control() => ascii.push(c),
            _ => ascii.push('_'),
        }
    }

    if name.is_ascii() {
        format!("attachment; filename=\"{}\"", ascii)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            ascii,
            urlencoding::encode(name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::UploadConfig;
    use crate::shared::test_helpers::{test_server, test_server_with, test_storage};
    use axum_test::multipart::{MultipartForm, Part};

    fn upload_form(file_name: &str, bytes: Vec<u8>) -> MultipartForm {
        MultipartForm::new()
            .add_text("bmwModel", "E46")
            .add_text("motor", "M54")
            .add_part(
                "file",
                Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_type("application/octet-stream"),
            )
    }

    #[test]
    fn test_attachment_disposition_plain() {
        assert_eq!(
            attachment_disposition("stage1.bin"),
            "attachment; filename=\"stage1.bin\""
        );
    }

    #[test]
    fn test_attachment_disposition_escapes() {
        assert_eq!(
            attachment_disposition("my \"best\" map.xdf"),
            "attachment; filename=\"my \\\"best\\\" map.xdf\""
        );
        assert_eq!(
            attachment_disposition("Steuergerät.bin"),
            "attachment; filename=\"Steuerger_t.bin\"; filename*=UTF-8''Steuerger%C3%A4t.bin"
        );
    }

    #[tokio::test]
    async fn test_upload_list_download_delete() {
        let server = test_server();

        let response = server
            .post("/api/files")
            .multipart(upload_form("Stage1.BIN", vec![0xde, 0xad, 0xbe, 0xef]))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: FileResponseDto = response.json();

        assert_eq!(created.filename, format!("{}-Stage1.BIN", created.id));
        assert_eq!(created.file_type, "bin");
        assert_eq!(created.file_size, 4);
        assert_eq!(created.bmw_model, "E46");
        assert_eq!(created.description, None);

        let listed: Vec<FileResponseDto> = server.get("/api/files").await.json();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        let download = server
            .get(&format!("/api/files/{}/download", created.id))
            .await;
        download.assert_status_ok();
        assert_eq!(
            download.header(header::CONTENT_DISPOSITION),
            "attachment; filename=\"Stage1.BIN\""
        );
        assert_eq!(
            download.header(header::CONTENT_TYPE),
            "application/octet-stream"
        );
        assert_eq!(&download.as_bytes()[..], b"\xde\xad\xbe\xef");

        server
            .delete(&format!("/api/files/{}", created.id))
            .await
            .assert_status_ok();
        server
            .get(&format!("/api/files/{}/download", created.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .delete(&format!("/api/files/{}", created.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_description_round_trips_as_null_when_omitted() {
        let server = test_server();

        let response = server
            .post("/api/files")
            .multipart(upload_form("map.xdf", b"<xdf/>".to_vec()).add_text("description", ""))
            .await;
        response.assert_status(StatusCode::CREATED);

        let listed: serde_json::Value = server.get("/api/files").await.json();
        assert!(listed[0]["description"].is_null());
        assert_eq!(listed[0]["originalName"], "map.xdf");
    }

    #[tokio::test]
    async fn test_list_files_filters_by_model() {
        let server = test_server();

        for model in ["E46", "E90", "E46"] {
            let form = MultipartForm::new()
                .add_text("bmwModel", model)
                .add_text("motor", "N52")
                .add_part("file", Part::bytes(vec![1u8]).file_name("a.a2l"));
            server
                .post("/api/files")
                .multipart(form)
                .await
                .assert_status(StatusCode::CREATED);
        }

        let e46: Vec<FileResponseDto> = server
            .get("/api/files")
            .add_query_param("model", "E46")
            .await
            .json();
        assert_eq!(e46.len(), 2);
        assert!(e46.iter().all(|f| f.bmw_model == "E46"));
        assert!(e46[0].uploaded_at >= e46[1].uploaded_at);

        let all: Vec<FileResponseDto> = server
            .get("/api/files")
            .add_query_param("model", "")
            .await
            .json();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_rejects_disallowed_extension() {
        let storage = test_storage();
        let server = test_server_with(storage.clone(), UploadConfig::default());

        let response = server
            .post("/api/files")
            .multipart(upload_form("tool.exe", b"MZ".to_vec()))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(storage.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_oversized_upload() {
        let storage = test_storage();
        let server = test_server_with(storage.clone(), UploadConfig::default());

        let response = server
            .post("/api/files")
            .multipart(upload_form("huge.bin", vec![0u8; 60 * 1024 * 1024]))
            .await;

        assert!(response.status_code().is_client_error());
        assert!(storage.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_upload_over_configured_limit() {
        let upload = UploadConfig {
            max_file_size: 16,
            ..UploadConfig::default()
        };
        let server = test_server_with(test_storage(), upload);

        server
            .post("/api/files")
            .multipart(upload_form("small.bin", vec![7u8; 16]))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/files")
            .multipart(upload_form("big.bin", vec![7u8; 17]))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_file_and_fields() {
        let server = test_server();

        let no_file = MultipartForm::new().add_text("bmwModel", "E46");
        let response = server.post("/api/files").multipart(no_file).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "No file uploaded");

        let text_only = MultipartForm::new()
            .add_text("bmwModel", "E46")
            .add_text("motor", "M54")
            .add_text("file", "not an upload");
        let response = server.post("/api/files").multipart(text_only).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "No file uploaded");

        let no_model = MultipartForm::new()
            .add_text("motor", "M54")
            .add_part("file", Part::bytes(vec![1u8]).file_name("a.bin"));
        let response = server.post("/api/files").multipart(no_model).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["errors"][0], "bmwModel is required");

        let empty = MultipartForm::new()
            .add_text("bmwModel", "E46")
            .add_text("motor", "M54")
            .add_part("file", Part::bytes(Vec::<u8>::new()).file_name("a.bin"));
        server
            .post("/api/files")
            .multipart(empty)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_or_malformed_ids_are_not_found() {
        let server = test_server();

        server
            .get(&format!("/api/files/{}/download", Uuid::new_v4()))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/api/files/not-a-uuid/download")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .delete("/api/files/not-a-uuid")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
