// ABOUTME: Account entity linking a user to an external identity provider
// ABOUTME: Keyed by (provider, providerAccountId) and holds the provider's OAuth token material

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of provider account, as tagged by the authentication adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[sea_orm(string_value = "oauth")]
    Oauth,
    #[sea_orm(string_value = "oidc")]
    Oidc,
    #[sea_orm(string_value = "email")]
    Email,
    #[sea_orm(string_value = "webauthn")]
    Webauthn,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(column_name = "userId")]
    pub user_id: String,
    #[sea_orm(column_name = "type")]
    pub account_type: AccountType,
    #[sea_orm(primary_key, auto_increment = false)]
    pub provider: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "providerAccountId")]
    pub provider_account_id: String,
    pub refresh_token: Option<String>,
    pub access_token: Option<String>,
    /// Seconds since the Unix epoch, as reported by the provider.
    pub expires_at: Option<i64>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub id_token: Option<String>,
    pub session_state: Option<String>,
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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
