use std::sync::Arc;

use crate::modules::skill::application::use_cases::{GetSkillUseCase, ListSkillsUseCase};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSkillUseCase + Send + Sync>,
}
