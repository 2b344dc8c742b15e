use std::sync::Arc;

use actix_web::web;

use crate::modules::cv_profile::application::cv_profile_use_cases::CvProfileUseCases;
use crate::modules::cv_profile::application::use_cases::GetCvProfileUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailsUseCase, ListProjectsBySkillUseCase, ListProjectsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::skill::application::use_cases::{GetSkillUseCase, ListSkillsUseCase};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case defaults to a stub; routes under test swap in their mock.
pub struct TestAppStateBuilder {
    cv_profile: CvProfileUseCases,
    skill: SkillUseCases,
    project: ProjectUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            cv_profile: CvProfileUseCases {
                get_profile: Arc::new(StubGetCvProfileUseCase),
            },
            skill: SkillUseCases {
                list: Arc::new(StubListSkillsUseCase),
                get_single: Arc::new(StubGetSkillUseCase),
            },
            project: ProjectUseCases {
                list: Arc::new(StubListProjectsUseCase),
                list_by_skill: Arc::new(StubListProjectsBySkillUseCase),
                get_details: Arc::new(StubGetProjectDetailsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_cv_profile(
        mut self,
        uc: impl GetCvProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cv_profile.get_profile = Arc::new(uc);
        self
    }

    pub fn with_list_skills(mut self, uc: impl ListSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skill.list = Arc::new(uc);
        self
    }

    pub fn with_get_skill(mut self, uc: impl GetSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.get_single = Arc::new(uc);
        self
    }

    pub fn with_list_projects(
        mut self,
        uc: impl ListProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.list = Arc::new(uc);
        self
    }

    pub fn with_list_projects_by_skill(
        mut self,
        uc: impl ListProjectsBySkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.list_by_skill = Arc::new(uc);
        self
    }

    pub fn with_get_project_details(
        mut self,
        uc: impl GetProjectDetailsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_details = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            cv_profile: self.cv_profile,
            skill: self.skill,
            project: self.project,
        })
    }
}
