use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::ValidatedJson;
use crate::features::tutorials::dtos::{
    CreateTutorialDto, ListTutorialsQuery, TutorialResponseDto,
};
use crate::features::tutorials::services::TutorialService;
use crate::shared::types::{ApiResponse, DeletedDto};
use crate::shared::validation::non_empty;

/// List tutorials, newest first
#[utoipa::path(
    get,
    path = "/api/tutorials",
    params(ListTutorialsQuery),
    responses(
        (status = 200, description = "Tutorials ordered by creation time, newest first", body = Vec<TutorialResponseDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "tutorials"
)]
pub async fn list_tutorials(
    State(service): State<Arc<TutorialService>>,
    Query(query): Query<ListTutorialsQuery>,
) -> Result<Json<Vec<TutorialResponseDto>>> {
    let category = non_empty(query.category);
    let tutorials = service.list(category.as_deref()).await?;
    Ok(Json(tutorials))
}

/// Add a tutorial video link
#[utoipa::path(
    post,
    path = "/api/tutorials",
    request_body = CreateTutorialDto,
    responses(
        (status = 201, description = "Tutorial created", body = TutorialResponseDto),
        (status = 400, description = "Invalid tutorial data")
    ),
    tag = "tutorials"
)]
pub async fn create_tutorial(
    State(service): State<Arc<TutorialService>>,
    ValidatedJson(dto): ValidatedJson<CreateTutorialDto>,
) -> Result<(StatusCode, Json<TutorialResponseDto>)> {
    let tutorial = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(tutorial)))
}

/// Delete a tutorial
#[utoipa::path(
    delete,
    path = "/api/tutorials/{id}",
    params(
        ("id" = String, Path, description = "Tutorial id")
    ),
    responses(
        (status = 200, description = "Tutorial deleted successfully", body = ApiResponse<DeletedDto>),
        (status = 404, description = "Tutorial not found")
    ),
    tag = "tutorials"
)]
pub async fn delete_tutorial(
    State(service): State<Arc<TutorialService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedDto>>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::NotFound("Tutorial not found".to_string()))?;
    service.delete(id).await?;

    Ok(Json(ApiResponse::success(
        Some(DeletedDto { deleted: true }),
        Some("Tutorial deleted successfully".to_string()),
    )))
}
