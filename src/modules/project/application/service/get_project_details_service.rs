use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailsError, GetProjectDetailsUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectWithTechnologies};

pub struct GetProjectDetailsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectDetailsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectDetailsUseCase for GetProjectDetailsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        project_id: i32,
    ) -> Result<ProjectWithTechnologies, GetProjectDetailsError> {
        let project = self.query.get_by_id(project_id).await?;
        let technologies_used = self.query.list_technologies_for_project(project.id).await?;

        Ok(ProjectWithTechnologies {
            project,
            technologies_used,
        })
    }
}
