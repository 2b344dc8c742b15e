use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::cv_profile::application::use_cases::GetCvProfileError;
use crate::modules::cv_profile::domain::entities::CvProfileDetails;
use crate::shared::api::validation::validate_id;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get CV profile details
///
/// Returns the profile with its education entries nested under `education`.
#[utoipa::path(
    get,
    path = "/api/v1/cv-profiles/{id}",
    tag = "cv-profiles",
    params(("id" = i64, Path, description = "CV profile ID")),
    responses(
        (status = 200, description = "CV profile found", body = CvProfileDetails),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "CV profile with given ID does not exist", body = ErrorResponse),
        (status = 500, description = "Any other server-side error", body = ErrorResponse)
    )
)]
#[get("/cv-profiles/{id}")]
pub async fn get_cv_profile_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = match validate_id(path.into_inner()) {
        Ok(id) => id,
        Err(e) => return e.to_response(),
    };

    match data.cv_profile.get_profile.execute(profile_id).await {
        Ok(details) => ApiResponse::success(details),

        Err(GetCvProfileError::ProfileNotFound) => {
            ApiResponse::not_found("CV_PROFILE_NOT_FOUND", "CV profile not found")
        }

        Err(GetCvProfileError::QueryFailed(msg)) => {
            error!("Failed to fetch CV profile {}: {}", profile_id, msg);
            ApiResponse::internal_error()
        }
    }
}
