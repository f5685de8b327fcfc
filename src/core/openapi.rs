use utoipa::{Modify, OpenApi};

use crate::features::export::{dtos as export_dtos, handlers as export_handlers};
use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::features::tutorials::{dtos as tutorials_dtos, handlers as tutorials_handlers};
use crate::shared::types::{ApiResponse, DeletedDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Files
        files_handlers::list_files,
        files_handlers::upload_file,
        files_handlers::download_file,
        files_handlers::delete_file,
        // Tutorials
        tutorials_handlers::list_tutorials,
        tutorials_handlers::create_tutorial,
        tutorials_handlers::delete_tutorial,
        // Export
        export_handlers::export_data,
    ),
    components(
        schemas(
            // Shared
            DeletedDto,
            ApiResponse<DeletedDto>,
            // Files
            files_dtos::UploadFileDto,
            files_dtos::FileResponseDto,
            // Tutorials
            tutorials_dtos::CreateTutorialDto,
            tutorials_dtos::TutorialResponseDto,
            // Export
            export_dtos::ExportDocumentDto,
            export_dtos::ExportDataDto,
            export_dtos::ExportFileDto,
            export_dtos::ExportStatisticsDto,
        )
    ),
    tags(
        (name = "files", description = "ECU calibration file upload and management"),
        (name = "tutorials", description = "Tutorial video links"),
        (name = "export", description = "JSON export of all stored data"),
    ),
    info(
        title = "ECU Central API",
        version = "0.1.0",
        description = "API documentation for the BMW ECU calibration file platform",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
