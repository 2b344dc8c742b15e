use sea_orm::entity::prelude::*;

use crate::modules::cv_profile::domain::entities::CvEducation;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cv_educations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub institution: String,

    pub degree: String,

    pub start_date: Date,

    pub end_date: Date,

    pub cv_profile_id: i32,
}

impl Model {
    pub fn to_domain(self) -> CvEducation {
        CvEducation {
            id: self.id,
            institution: self.institution,
            degree: self.degree,
            start_date: self.start_date,
            end_date: self.end_date,
            cv_profile_id: self.cv_profile_id,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cv_profiles::Entity",
        from = "Column::CvProfileId",
        to = "super::cv_profiles::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CvProfiles,
}

impl Related<super::cv_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CvProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
