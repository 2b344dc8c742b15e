pub mod project_skills;
pub mod project_technologies;
pub mod projects;
pub mod technologies;
