// src/api/openapi.rs
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::cv_profile::domain::entities::{CvEducation, CvProfile, CvProfileDetails};
use crate::modules::project::application::ports::outgoing::{
    ProjectRow, ProjectWithTechnologies, TechnologyItem,
};
use crate::modules::skill::domain::entities::Skill;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CV API",
        version = "1.0.0",
        description = "Read-only API serving a personal CV: profile, education, skills, projects and technologies"
    ),
    paths(
        // CV profile endpoints
        crate::modules::cv_profile::adapter::incoming::web::routes::get_cv_profile_handler,

        // Skill endpoints
        crate::modules::skill::adapter::incoming::web::routes::list_skills_handler,
        crate::modules::skill::adapter::incoming::web::routes::get_skill_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::list_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::list_projects_by_skill_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_details_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            CvProfile,
            CvEducation,
            CvProfileDetails,
            Skill,
            ProjectRow,
            TechnologyItem,
            ProjectWithTechnologies
        )
    ),
    tags(
        (name = "cv-profiles", description = "CV profile endpoints"),
        (name = "skills", description = "Skill endpoints"),
        (name = "projects", description = "Project and technology endpoints"),
    )
)]
pub struct ApiDoc;
