use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::{
    LinkedTechnology, ProjectQuery, ProjectQueryError, ProjectRow, ProjectWithTechnologies,
    TechnologyItem,
};
use crate::shared::pagination::PageRequest;

pub fn project_row(id: i32, title: &str) -> ProjectRow {
    ProjectRow {
        id,
        title: title.to_string(),
        short_description: format!("{title} in short"),
        description: format!("{title} in detail"),
        image: format!("project-{id}.png"),
        hex_theme_color: "#1E90FF".to_string(),
        project_url: format!("https://example.com/projects/{id}"),
        significance: id,
    }
}

pub fn technology(id: i32, name: &str, order_field: i32) -> TechnologyItem {
    TechnologyItem {
        id,
        name: name.to_string(),
        url: format!("https://{}.example.org", name.to_lowercase()),
        order_field,
    }
}

pub fn enriched(id: i32, title: &str, technologies_used: Vec<TechnologyItem>) -> ProjectWithTechnologies {
    ProjectWithTechnologies {
        project: project_row(id, title),
        technologies_used,
    }
}

/* --------------------------------------------------
 * In-memory ProjectQuery
 * -------------------------------------------------- */

/// Small relational model of profiles, projects, technologies and skills
/// with the same ordering rules as the Postgres adapter.
#[derive(Clone, Default)]
pub struct InMemoryProjectQuery {
    profiles: Vec<i32>,
    projects: Vec<(i32, ProjectRow)>,
    technologies: Vec<TechnologyItem>,
    project_technologies: Vec<(i32, i32)>,
    skills: Vec<(i32, i32, String)>,
    project_skills: Vec<(i32, i32)>,
    failing_technology_project: Option<i32>,
    fail_project_list: bool,
    technology_delay: Option<Duration>,
    pub technology_calls: Arc<AtomicUsize>,
    pub batched_calls: Arc<AtomicUsize>,
}

impl InMemoryProjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile_id: i32) -> Self {
        self.profiles.push(profile_id);
        self
    }

    pub fn with_project(mut self, profile_id: i32, project: ProjectRow) -> Self {
        self.projects.push((profile_id, project));
        self
    }

    pub fn with_technology(mut self, technology: TechnologyItem) -> Self {
        self.technologies.push(technology);
        self
    }

    pub fn link_technology(mut self, project_id: i32, technology_id: i32) -> Self {
        self.project_technologies.push((project_id, technology_id));
        self
    }

    pub fn with_skill(mut self, skill_id: i32, profile_id: i32, name: &str) -> Self {
        self.skills.push((skill_id, profile_id, name.to_string()));
        self
    }

    pub fn link_skill(mut self, project_id: i32, skill_id: i32) -> Self {
        self.project_skills.push((project_id, skill_id));
        self
    }

    /// Technology lookups touching `project_id` fail.
    pub fn failing_technologies_for(mut self, project_id: i32) -> Self {
        self.failing_technology_project = Some(project_id);
        self
    }

    pub fn failing_project_list(mut self) -> Self {
        self.fail_project_list = true;
        self
    }

    /// Every technology lookup sleeps for `delay` first.
    pub fn with_technology_delay(mut self, delay: Duration) -> Self {
        self.technology_delay = Some(delay);
        self
    }

    fn paginate(rows: Vec<ProjectRow>, page: PageRequest) -> Vec<ProjectRow> {
        rows.into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect()
    }

    fn technologies_of(&self, project_id: i32) -> Vec<TechnologyItem> {
        let mut items: Vec<TechnologyItem> = self
            .project_technologies
            .iter()
            .filter(|(project, _)| *project == project_id)
            .filter_map(|(_, tech)| self.technologies.iter().find(|t| t.id == *tech).cloned())
            .collect();
        items.sort_by_key(|t| (t.order_field, t.id));
        items
    }

    async fn before_technology_lookup(&self, project_ids: &[i32]) -> Result<(), ProjectQueryError> {
        if let Some(delay) = self.technology_delay {
            tokio::time::sleep(delay).await;
        }
        match self.failing_technology_project {
            Some(failing) if project_ids.contains(&failing) => Err(
                ProjectQueryError::DatabaseError(format!("technology lookup failed for {failing}")),
            ),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjectQuery {
    async fn profile_exists(&self, profile_id: i32) -> Result<bool, ProjectQueryError> {
        Ok(self.profiles.contains(&profile_id))
    }

    async fn get_by_id(&self, project_id: i32) -> Result<ProjectRow, ProjectQueryError> {
        self.projects
            .iter()
            .find(|(_, p)| p.id == project_id)
            .map(|(_, p)| p.clone())
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn list_by_profile(
        &self,
        profile_id: i32,
        page: PageRequest,
    ) -> Result<Vec<ProjectRow>, ProjectQueryError> {
        if self.fail_project_list {
            return Err(ProjectQueryError::DatabaseError("connection reset".to_string()));
        }

        let mut rows: Vec<ProjectRow> = self
            .projects
            .iter()
            .filter(|(owner, _)| *owner == profile_id)
            .map(|(_, p)| p.clone())
            .collect();
        rows.sort_by_key(|p| p.id);
        Ok(Self::paginate(rows, page))
    }

    async fn list_project_ids_for_skill(
        &self,
        profile_id: i32,
        skill_name: &str,
    ) -> Result<Vec<i32>, ProjectQueryError> {
        let skill_ids: Vec<i32> = self
            .skills
            .iter()
            .filter(|(_, owner, name)| *owner == profile_id && name == skill_name)
            .map(|(id, _, _)| *id)
            .collect();

        let mut ids: Vec<i32> = self
            .project_skills
            .iter()
            .filter(|(_, skill)| skill_ids.contains(skill))
            .map(|(project, _)| *project)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }

    async fn list_by_ids(
        &self,
        profile_id: i32,
        project_ids: &[i32],
        page: PageRequest,
    ) -> Result<Vec<ProjectRow>, ProjectQueryError> {
        if self.fail_project_list {
            return Err(ProjectQueryError::DatabaseError("connection reset".to_string()));
        }

        let mut rows: Vec<ProjectRow> = self
            .projects
            .iter()
            .filter(|(owner, p)| *owner == profile_id && project_ids.contains(&p.id))
            .map(|(_, p)| p.clone())
            .collect();
        rows.sort_by_key(|p| p.id);
        Ok(Self::paginate(rows, page))
    }

    async fn list_technologies_for_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<TechnologyItem>, ProjectQueryError> {
        self.technology_calls.fetch_add(1, Ordering::SeqCst);
        self.before_technology_lookup(&[project_id]).await?;
        Ok(self.technologies_of(project_id))
    }

    async fn list_technologies_for_projects(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<LinkedTechnology>, ProjectQueryError> {
        self.batched_calls.fetch_add(1, Ordering::SeqCst);
        self.before_technology_lookup(project_ids).await?;

        let mut ids = project_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        Ok(ids
            .into_iter()
            .flat_map(|project_id| {
                self.technologies_of(project_id)
                    .into_iter()
                    .map(move |technology| LinkedTechnology {
                        project_id,
                        technology,
                    })
            })
            .collect())
    }
}
