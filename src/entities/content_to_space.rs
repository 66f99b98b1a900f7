// ABOUTME: Join entity placing stored content into spaces
// ABOUTME: One row per (contentId, spaceId); removed when either side is deleted

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contentToSpace")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "contentId")]
    pub content_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "spaceId")]
    pub space_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stored_content::Entity",
        from = "Column::ContentId",
        to = "super::stored_content::Column::Id",
        on_delete = "Cascade"
    )]
    StoredContent,
    #[sea_orm(
        belongs_to = "super::space::Entity",
        from = "Column::SpaceId",
        to = "super::space::Column::Id",
        on_delete = "Cascade"
    )]
    Space,
}

impl Related<super::stored_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoredContent.def()
    }
}

impl Related<super::space::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Space.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
