use actix_web::{get, web, Responder};

use super::list_projects::list_error_response;
use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::outgoing::ProjectWithTechnologies;
use crate::shared::api::validation::{validate_id, validate_skill_name, PageQuery};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List a profile's projects linked to a skill
///
/// The skill is matched by exact name. An unknown skill yields `[]`.
#[utoipa::path(
    get,
    path = "/api/v1/projects/skill/{id}/{skill}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "CV profile ID"),
        ("skill" = String, Path, description = "Skill name, letters only"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of matching projects with `technologies_used`", body = [ProjectWithTechnologies]),
        (status = 400, description = "Invalid ID, skill name or pagination", body = ErrorResponse),
        (status = 404, description = "CV profile does not exist", body = ErrorResponse),
        (status = 500, description = "Any other server-side error", body = ErrorResponse),
        (status = 503, description = "Aggregation did not finish in time", body = ErrorResponse)
    )
)]
#[get("/projects/skill/{id}/{skill}")]
pub async fn list_projects_by_skill_handler(
    path: web::Path<(i64, String)>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (raw_id, skill) = path.into_inner();

    let profile_id = match validate_id(raw_id) {
        Ok(id) => id,
        Err(e) => return e.to_response(),
    };
    let skill_name = match validate_skill_name(&skill) {
        Ok(name) => name,
        Err(e) => return e.to_response(),
    };
    let page = match query.validate() {
        Ok(page) => page,
        Err(e) => return e.to_response(),
    };

    match data
        .project
        .list_by_skill
        .execute(profile_id, skill_name, page)
        .await
    {
        Ok(projects) => ApiResponse::success(projects),
        Err(err) => list_error_response(err, profile_id),
    }
}
