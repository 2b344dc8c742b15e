mod get_project_details;
mod list_projects;
mod list_projects_by_skill;

pub use get_project_details::{GetProjectDetailsError, GetProjectDetailsUseCase};
pub use list_projects::{ListProjectsError, ListProjectsUseCase};
pub use list_projects_by_skill::ListProjectsBySkillUseCase;
