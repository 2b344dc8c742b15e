use sea_orm::entity::prelude::*;

use crate::modules::project::application::ports::outgoing::TechnologyItem;

/// Global catalogue entry, shared by any number of projects.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "technologies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub url: String,

    pub order_field: i32,
}

impl Model {
    pub fn to_item(self) -> TechnologyItem {
        TechnologyItem {
            id: self.id,
            name: self.name,
            url: self.url,
            order_field: self.order_field,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_technologies::Entity")]
    ProjectTechnologies,
}

impl Related<super::project_technologies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTechnologies.def()
    }
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_technologies::Relation::Projects.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_technologies::Relation::Technologies.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
