use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;
use crate::modules::project::application::ports::outgoing::ProjectWithTechnologies;
use crate::shared::api::validation::{validate_id, PageQuery};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List a profile's projects with their technologies
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "CV profile ID"), PageQuery),
    responses(
        (status = 200, description = "Page of projects, each with `technologies_used`", body = [ProjectWithTechnologies]),
        (status = 400, description = "Invalid ID or pagination", body = ErrorResponse),
        (status = 404, description = "CV profile does not exist", body = ErrorResponse),
        (status = 500, description = "Any other server-side error", body = ErrorResponse),
        (status = 503, description = "Aggregation did not finish in time", body = ErrorResponse)
    )
)]
#[get("/projects/{id}")]
pub async fn list_projects_handler(
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = match validate_id(path.into_inner()) {
        Ok(id) => id,
        Err(e) => return e.to_response(),
    };
    let page = match query.validate() {
        Ok(page) => page,
        Err(e) => return e.to_response(),
    };

    match data.project.list.execute(profile_id, page).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(err) => list_error_response(err, profile_id),
    }
}

/// Shared by the plain and the skill-filtered project listing.
pub(super) fn list_error_response(err: ListProjectsError, profile_id: i32) -> HttpResponse {
    match err {
        ListProjectsError::ProfileNotFound => {
            ApiResponse::not_found("CV_PROFILE_NOT_FOUND", "CV profile not found")
        }

        ListProjectsError::Cancelled(reason) => {
            warn!("Project listing for profile {} cancelled: {}", profile_id, reason);
            ApiResponse::service_unavailable("REQUEST_CANCELLED", "Request took too long to complete")
        }

        ListProjectsError::QueryFailed(msg) => {
            error!("Failed to list projects for profile {}: {}", profile_id, msg);
            ApiResponse::internal_error()
        }
    }
}
