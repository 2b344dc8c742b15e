mod get_project_details;
mod list_projects;
mod list_projects_by_skill;

pub use get_project_details::*;
pub use list_projects::*;
pub use list_projects_by_skill::*;
