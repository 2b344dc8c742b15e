use async_trait::async_trait;

use crate::modules::cv_profile::application::use_cases::{GetCvProfileError, GetCvProfileUseCase};
use crate::modules::cv_profile::domain::entities::CvProfileDetails;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailsError, GetProjectDetailsUseCase, ListProjectsBySkillUseCase,
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectWithTechnologies;
use crate::modules::skill::application::use_cases::{
    GetSkillError, GetSkillUseCase, ListSkillsError, ListSkillsUseCase,
};
use crate::modules::skill::domain::entities::Skill;
use crate::shared::pagination::PageRequest;

/* --------------------------------------------------
 * CV profile
 * -------------------------------------------------- */

pub struct StubGetCvProfileUseCase;

#[async_trait]
impl GetCvProfileUseCase for StubGetCvProfileUseCase {
    async fn execute(&self, _profile_id: i32) -> Result<CvProfileDetails, GetCvProfileError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Skills
 * -------------------------------------------------- */

pub struct StubListSkillsUseCase;

#[async_trait]
impl ListSkillsUseCase for StubListSkillsUseCase {
    async fn execute(&self, _profile_id: i32) -> Result<Vec<Skill>, ListSkillsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetSkillUseCase;

#[async_trait]
impl GetSkillUseCase for StubGetSkillUseCase {
    async fn execute(&self, _skill_id: i32) -> Result<Skill, GetSkillError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Projects
 * -------------------------------------------------- */

pub struct StubListProjectsUseCase;

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(
        &self,
        _profile_id: i32,
        _page: PageRequest,
    ) -> Result<Vec<ProjectWithTechnologies>, ListProjectsError> {
        Ok(vec![])
    }
}

pub struct StubListProjectsBySkillUseCase;

#[async_trait]
impl ListProjectsBySkillUseCase for StubListProjectsBySkillUseCase {
    async fn execute(
        &self,
        _profile_id: i32,
        _skill_name: &str,
        _page: PageRequest,
    ) -> Result<Vec<ProjectWithTechnologies>, ListProjectsError> {
        Ok(vec![])
    }
}

pub struct StubGetProjectDetailsUseCase;

#[async_trait]
impl GetProjectDetailsUseCase for StubGetProjectDetailsUseCase {
    async fn execute(
        &self,
        _project_id: i32,
    ) -> Result<ProjectWithTechnologies, GetProjectDetailsError> {
        Err(GetProjectDetailsError::ProjectNotFound)
    }
}
