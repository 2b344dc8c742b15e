use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectDetailsError;
use crate::modules::project::application::ports::outgoing::ProjectWithTechnologies;
use crate::shared::api::validation::validate_id;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a single project with its technologies
#[utoipa::path(
    get,
    path = "/api/v1/project-details/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project found", body = ProjectWithTechnologies),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Project does not exist", body = ErrorResponse),
        (status = 500, description = "Any other server-side error", body = ErrorResponse)
    )
)]
#[get("/project-details/{id}")]
pub async fn get_project_details_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = match validate_id(path.into_inner()) {
        Ok(id) => id,
        Err(e) => return e.to_response(),
    };

    match data.project.get_details.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetProjectDetailsError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectDetailsError::QueryFailed(msg)) => {
            error!("Failed to fetch project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
