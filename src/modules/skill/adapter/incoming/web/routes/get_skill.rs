use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::skill::application::use_cases::GetSkillError;
use crate::modules::skill::domain::entities::Skill;
use crate::shared::api::validation::validate_id;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a single skill
#[utoipa::path(
    get,
    path = "/api/v1/skill-details/{id}",
    tag = "skills",
    params(("id" = i64, Path, description = "Skill ID")),
    responses(
        (status = 200, description = "Skill found", body = Skill),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Skill does not exist", body = ErrorResponse),
        (status = 500, description = "Any other server-side error", body = ErrorResponse)
    )
)]
#[get("/skill-details/{id}")]
pub async fn get_skill_handler(path: web::Path<i64>, data: web::Data<AppState>) -> impl Responder {
    let skill_id = match validate_id(path.into_inner()) {
        Ok(id) => id,
        Err(e) => return e.to_response(),
    };

    match data.skill.get_single.execute(skill_id).await {
        Ok(skill) => ApiResponse::success(skill),

        Err(GetSkillError::SkillNotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(GetSkillError::QueryFailed(msg)) => {
            error!("Failed to fetch skill {}: {}", skill_id, msg);
            ApiResponse::internal_error()
        }
    }
}
