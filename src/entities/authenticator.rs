// ABOUTME: WebAuthn authenticator entity storing registered passkey public keys per user
// ABOUTME: Keyed by (userId, credentialID) with credentialID also globally unique

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authenticator")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "userId")]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false, unique, column_name = "credentialID")]
    pub credential_id: String,
    #[sea_orm(column_name = "providerAccountId")]
    pub provider_account_id: String,
    #[sea_orm(column_name = "credentialPublicKey")]
    pub credential_public_key: String,
    pub counter: i64,
    #[sea_orm(column_name = "credentialDeviceType")]
    pub credential_device_type: String,
    #[sea_orm(column_name = "credentialBackedUp")]
    pub credential_backed_up: bool,
    pub transports: Option<String>, // Comma-separated, e.g. "usb,nfc"
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
