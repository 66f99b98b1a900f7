// ABOUTME: Space entity for named collections that group stored content
// ABOUTME: Names are globally unique and default to "none"

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "space")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_name = "user")]
    pub user_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::content_to_space::Entity")]
    ContentToSpace,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::content_to_space::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentToSpace.def()
    }
}

impl Related<super::stored_content::Entity> for Entity {
    fn to() -> RelationDef {
        super::content_to_space::Relation::StoredContent.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::content_to_space::Relation::Space.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
