pub mod project_query;
#[cfg(any(test, feature = "test-helpers"))]
pub mod project_repository;

pub use project_query::{
    LinkedTechnology, ProjectQuery, ProjectQueryError, ProjectRow, ProjectWithTechnologies,
    TechnologyItem,
};
#[cfg(any(test, feature = "test-helpers"))]
pub use project_repository::{
    CreateProjectData, CreateTechnologyData, ProjectRepository, ProjectRepositoryError,
};
