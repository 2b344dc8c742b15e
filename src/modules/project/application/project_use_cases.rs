use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailsUseCase, ListProjectsBySkillUseCase, ListProjectsUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub list_by_skill: Arc<dyn ListProjectsBySkillUseCase + Send + Sync>,
    pub get_details: Arc<dyn GetProjectDetailsUseCase + Send + Sync>,
}
