// ABOUTME: User entity for identity records shared by auth adapters and saved content
// ABOUTME: Owns accounts, sessions, authenticators, stored content and spaces via cascading FKs

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use uuid::Uuid;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    /// Milliseconds since the Unix epoch.
    #[sea_orm(column_name = "emailVerified")]
    pub email_verified: Option<i64>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account::Entity")]
    Accounts,
    #[sea_orm(has_many = "super::session::Entity")]
    Sessions,
    #[sea_orm(has_many = "super::authenticator::Entity")]
    Authenticators,
    #[sea_orm(has_many = "super::stored_content::Entity")]
    StoredContent,
    #[sea_orm(has_many = "super::space::Entity")]
    Spaces,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl Related<super::authenticator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Authenticators.def()
    }
}

impl Related<super::stored_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoredContent.def()
    }
}

impl Related<super::space::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Spaces.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4().to_string()),
            ..ActiveModelTrait::default()
        }
    }
}
