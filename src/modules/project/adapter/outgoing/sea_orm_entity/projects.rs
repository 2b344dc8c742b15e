use sea_orm::entity::prelude::*;

use crate::modules::cv_profile::adapter::outgoing::sea_orm_entity::cv_profiles;
use crate::modules::project::application::ports::outgoing::ProjectRow;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub short_description: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    pub hex_theme_color: String,

    #[sea_orm(column_type = "Text")]
    pub project_url: String,

    pub significance: i32,

    pub cv_profile_id: i32,
}

impl Model {
    pub fn to_row(self) -> ProjectRow {
        ProjectRow {
            id: self.id,
            title: self.title,
            short_description: self.short_description,
            description: self.description,
            image: self.image,
            hex_theme_color: self.hex_theme_color,
            project_url: self.project_url,
            significance: self.significance,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "cv_profiles::Entity",
        from = "Column::CvProfileId",
        to = "cv_profiles::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CvProfiles,

    #[sea_orm(has_many = "super::project_technologies::Entity")]
    ProjectTechnologies,

    #[sea_orm(has_many = "super::project_skills::Entity")]
    ProjectSkills,
}

impl Related<cv_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CvProfiles.def()
    }
}

impl Related<super::project_technologies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTechnologies.def()
    }
}

impl Related<super::project_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectSkills.def()
    }
}

// many-to-many through project_technologies
impl Related<super::technologies::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_technologies::Relation::Technologies.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_technologies::Relation::Projects.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
