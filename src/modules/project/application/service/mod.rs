mod deadline;
mod get_project_details_service;
mod list_projects_by_skill_service;
mod list_projects_with_technologies_service;
mod technology_join;

pub use deadline::DEFAULT_AGGREGATION_TIMEOUT;
pub use get_project_details_service::GetProjectDetailsService;
pub use list_projects_by_skill_service::ListProjectsBySkillService;
pub use list_projects_with_technologies_service::ListProjectsWithTechnologiesService;
pub use technology_join::{attach_technologies, TechnologyFetchStrategy, UnknownStrategy};
