use sea_orm::entity::prelude::*;

use crate::modules::cv_profile::adapter::outgoing::sea_orm_entity::cv_profiles;
use crate::modules::skill::domain::entities::Skill;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub category: String,

    pub importance: i32,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    pub hex_theme_color: String,

    pub cv_profile_id: i32,
}

impl Model {
    pub fn to_domain(self) -> Skill {
        Skill {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            importance: self.importance,
            image: self.image,
            hex_theme_color: self.hex_theme_color,
            cv_profile_id: self.cv_profile_id,
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
}

impl Related<cv_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CvProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
