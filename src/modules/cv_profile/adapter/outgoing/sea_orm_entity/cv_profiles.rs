use sea_orm::entity::prelude::*;

use crate::modules::cv_profile::domain::entities::CvProfile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cv_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub email: String,

    pub phone: String,

    pub address: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin_url: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub github_url: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "Text")]
    pub profile_picture: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(self) -> CvProfile {
        CvProfile {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            linkedin_url: self.linkedin_url,
            github_url: self.github_url,
            bio: self.bio,
            profile_picture: self.profile_picture,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cv_educations::Entity")]
    CvEducations,
}

impl Related<super::cv_educations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CvEducations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
