use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::cv_profile::application::ports::outgoing::{
    CreateCvEducationData, CreateCvProfileData, CvProfileRepository, CvProfileRepositoryError,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, CreateTechnologyData, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::skill::application::ports::outgoing::{
    CreateSkillData, SkillRepository, SkillRepositoryError,
};

#[cfg(feature = "test-helpers")]
mod routes;

#[cfg(feature = "test-helpers")]
pub use routes::configure_routes;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SeededCv {
    pub profile_id: i32,
    pub skill_name: String,
    /// In insertion order: the first and third are linked to the skill.
    pub project_ids: Vec<i32>,
    pub technology_ids: Vec<i32>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Profile(#[from] CvProfileRepositoryError),

    #[error(transparent)]
    Skill(#[from] SkillRepositoryError),

    #[error(transparent)]
    Project(#[from] ProjectRepositoryError),
}

/// Inserts one profile with an education, the skill "Go", three projects and
/// two technologies. Only the first project gets technologies.
pub async fn seed_sample_cv(
    profiles: &dyn CvProfileRepository,
    skills: &dyn SkillRepository,
    projects: &dyn ProjectRepository,
) -> Result<SeededCv, SeedError> {
    let profile = profiles
        .create_profile(CreateCvProfileData {
            name: "Sample Person".to_string(),
            email: "sample@example.com".to_string(),
            phone: "+10000000000".to_string(),
            address: "1 Sample Street".to_string(),
            linkedin_url: None,
            github_url: "https://github.com/sample".to_string(),
            bio: "Seeded profile".to_string(),
            profile_picture: "sample.png".to_string(),
        })
        .await?;

    profiles
        .create_education(CreateCvEducationData {
            institution: "Sample University".to_string(),
            degree: "BSc Computer Science".to_string(),
            start_date: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2019, 6, 30).unwrap_or_default(),
            cv_profile_id: profile.id,
        })
        .await?;

    let skill = skills
        .create_skill(CreateSkillData {
            name: "Go".to_string(),
            description: "Backend services".to_string(),
            category: "language".to_string(),
            importance: 5,
            image: "go.png".to_string(),
            hex_theme_color: "#00ADD8".to_string(),
            cv_profile_id: profile.id,
        })
        .await?;

    let mut project_ids = Vec::with_capacity(3);
    for (n, title) in ["P1", "P2", "P3"].into_iter().enumerate() {
        let row = projects
            .create_project(CreateProjectData {
                title: title.to_string(),
                short_description: format!("{title} short"),
                description: format!("{title} description"),
                image: format!("{}.png", title.to_lowercase()),
                hex_theme_color: "#336699".to_string(),
                project_url: format!("https://example.com/{}", title.to_lowercase()),
                significance: n as i32 + 1,
                cv_profile_id: profile.id,
            })
            .await?;
        project_ids.push(row.id);
    }

    let mut technology_ids = Vec::with_capacity(2);
    for (order_field, name) in [(1, "T1"), (2, "T2")] {
        let item = projects
            .create_technology(CreateTechnologyData {
                name: name.to_string(),
                url: format!("https://{}.example.org", name.to_lowercase()),
                order_field,
            })
            .await?;
        technology_ids.push(item.id);
    }

    for technology_id in &technology_ids {
        projects
            .create_project_technology(project_ids[0], *technology_id)
            .await?;
    }
    for project_id in [project_ids[0], project_ids[2]] {
        projects.create_project_skill(project_id, skill.id).await?;
    }

    Ok(SeededCv {
        profile_id: profile.id,
        skill_name: skill.name,
        project_ids,
        technology_ids,
    })
}
