use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::skill::application::use_cases::ListSkillsError;
use crate::modules::skill::domain::entities::Skill;
use crate::shared::api::validation::validate_id;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List skills of a CV profile
///
/// Ordered by id, at most 50 entries.
#[utoipa::path(
    get,
    path = "/api/v1/skills/{id}",
    tag = "skills",
    params(("id" = i64, Path, description = "CV profile ID")),
    responses(
        (status = 200, description = "Skills of the profile (possibly empty)", body = [Skill]),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "CV profile does not exist", body = ErrorResponse),
        (status = 500, description = "Any other server-side error", body = ErrorResponse)
    )
)]
#[get("/skills/{id}")]
pub async fn list_skills_handler(path: web::Path<i64>, data: web::Data<AppState>) -> impl Responder {
    let profile_id = match validate_id(path.into_inner()) {
        Ok(id) => id,
        Err(e) => return e.to_response(),
    };

    match data.skill.list.execute(profile_id).await {
        Ok(skills) => ApiResponse::success(skills),

        Err(ListSkillsError::ProfileNotFound) => {
            ApiResponse::not_found("CV_PROFILE_NOT_FOUND", "CV profile not found")
        }

        Err(ListSkillsError::QueryFailed(msg)) => {
            error!("Failed to list skills for profile {}: {}", profile_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::skill::application::use_cases::ListSkillsUseCase;
    use crate::shared::api::custom_path_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockListSkillsUseCase {
        result: Result<Vec<Skill>, ListSkillsError>,
    }

    #[async_trait]
    impl ListSkillsUseCase for MockListSkillsUseCase {
        async fn execute(&self, _profile_id: i32) -> Result<Vec<Skill>, ListSkillsError> {
            self.result.clone()
        }
    }

    fn go_skill() -> Skill {
        Skill {
            id: 1,
            name: "Go".to_string(),
            description: "Concurrency".to_string(),
            category: "Language".to_string(),
            importance: 1,
            image: "go.svg".to_string(),
            hex_theme_color: "#00ADD8".to_string(),
            cv_profile_id: 1,
        }
    }

    async fn call(uri: &str, result: Result<Vec<Skill>, ListSkillsError>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_list_skills(MockListSkillsUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_path_config())
                .service(list_skills_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_list_skills_success() {
        let (status, body) = call("/skills/1", Ok(vec![go_skill()])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Go");
        assert_eq!(body[0]["hex_theme_color"], "#00ADD8");
        assert_eq!(body[0]["cv_profile_id"], 1);
    }

    #[actix_web::test]
    async fn test_list_skills_empty_is_array() {
        let (status, body) = call("/skills/1", Ok(vec![])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_list_skills_invalid_id() {
        let (status, body) = call("/skills/-3", Ok(vec![])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_list_skills_profile_not_found() {
        let (status, body) = call("/skills/5", Err(ListSkillsError::ProfileNotFound)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "CV_PROFILE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_list_skills_internal_error() {
        let (status, body) = call(
            "/skills/5",
            Err(ListSkillsError::QueryFailed("db down".to_string())),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
