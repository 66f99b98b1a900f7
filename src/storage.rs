// ABOUTME: SeaORM storage layer for users, auth adapter records, saved content and spaces
// ABOUTME: Thin persistence surface; constraint enforcement is left to the database schema

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectOptions, Database,
    DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, NotSet, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::config::Config;
use crate::entities::{
    account, authenticator, content_to_space, session, space, stored_content, user,
    verification_token,
};
use crate::error::{AppError, Result};
use crate::migration::Migrator;
use crate::types::*;

pub struct Storage {
    pub db: DatabaseConnection,
}

impl Storage {
    /// Open the configured database and bring its schema up to date.
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.max_connections)
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        Migrator::up(&db, None).await?;
        info!(url = %config.database_url, "database schema ready");

        Ok(Self { db })
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // Users

    pub async fn create_user(&self, new_user: NewUser) -> Result<user::Model> {
        let mut active = user::ActiveModel::new();
        if let Some(id) = new_user.id {
            active.id = Set(id);
        }
        active.name = Set(new_user.name);
        active.email = Set(new_user.email);
        active.email_verified = Set(new_user.email_verified.map(|at| at.timestamp_millis()));
        active.image = Set(new_user.image);

        let created = active.insert(&self.db).await?;
        debug!(user_id = %created.id, "user created");
        Ok(created)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<user::Model>> {
        Ok(user::Entity::find_by_id(user_id).one(&self.db).await?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    pub async fn update_user(&self, user_id: &str, changes: UserUpdate) -> Result<user::Model> {
        let existing = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {user_id}")))?;

        let mut active = existing.into_active_model();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(verified) = changes.email_verified {
            active.email_verified = Set(verified.map(|at| at.timestamp_millis()));
        }
        if let Some(image) = changes.image {
            active.image = Set(image);
        }

        Ok(active.update(&self.db).await?)
    }

    /// Dependent accounts, sessions, authenticators, content and spaces go with the user.
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        let result = user::Entity::delete_by_id(user_id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("user {user_id}")));
        }

        info!(user_id, "user deleted");
        Ok(())
    }

    // Accounts

    pub async fn link_account(&self, new_account: NewAccount) -> Result<account::Model> {
        let active = account::ActiveModel {
            user_id: Set(new_account.user_id),
            account_type: Set(new_account.account_type),
            provider: Set(new_account.provider),
            provider_account_id: Set(new_account.provider_account_id),
            refresh_token: Set(new_account.refresh_token),
            access_token: Set(new_account.access_token),
            expires_at: Set(new_account.expires_at),
            token_type: Set(new_account.token_type),
            scope: Set(new_account.scope),
            id_token: Set(new_account.id_token),
            session_state: Set(new_account.session_state),
        };

        Ok(active.insert(&self.db).await?)
    }

    pub async fn get_user_by_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> Result<Option<user::Model>> {
        let found = account::Entity::find_by_id((
            provider.to_string(),
            provider_account_id.to_string(),
        ))
        .find_also_related(user::Entity)
        .one(&self.db)
        .await?;

        Ok(found.and_then(|(_, user)| user))
    }

    pub async fn unlink_account(&self, provider: &str, provider_account_id: &str) -> Result<()> {
        let result =
            account::Entity::delete_by_id((provider.to_string(), provider_account_id.to_string()))
                .exec(&self.db)
                .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "account {provider}/{provider_account_id}"
            )));
        }

        info!(provider, provider_account_id, "account unlinked");
        Ok(())
    }

    // Sessions

    pub async fn create_session(
        &self,
        session_token: &str,
        user_id: &str,
        expires: DateTime<Utc>,
    ) -> Result<session::Model> {
        let active = session::ActiveModel {
            session_token: Set(session_token.to_string()),
            user_id: Set(user_id.to_string()),
            expires: Set(expires.timestamp_millis()),
        };

        Ok(active.insert(&self.db).await?)
    }

    /// Expired sessions are returned as-is; the caller decides what expiry means.
    pub async fn get_session_and_user(
        &self,
        session_token: &str,
    ) -> Result<Option<(session::Model, user::Model)>> {
        let found = session::Entity::find_by_id(session_token)
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?;

        Ok(found.and_then(|(session, user)| user.map(|user| (session, user))))
    }

    pub async fn update_session_expiry(
        &self,
        session_token: &str,
        expires: DateTime<Utc>,
    ) -> Result<Option<session::Model>> {
        let Some(existing) = session::Entity::find_by_id(session_token)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.expires = Set(expires.timestamp_millis());
        Ok(Some(active.update(&self.db).await?))
    }

    pub async fn delete_session(&self, session_token: &str) -> Result<()> {
        let result = session::Entity::delete_by_id(session_token)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("session".to_string()));
        }
        Ok(())
    }

    // Verification tokens

    pub async fn create_verification_token(
        &self,
        identifier: &str,
        token: &str,
        expires: DateTime<Utc>,
    ) -> Result<verification_token::Model> {
        let active = verification_token::ActiveModel {
            identifier: Set(identifier.to_string()),
            token: Set(token.to_string()),
            expires: Set(expires.timestamp_millis()),
        };

        Ok(active.insert(&self.db).await?)
    }

    /// Consume a token: the row is returned once and removed in the same transaction.
    pub async fn use_verification_token(
        &self,
        identifier: &str,
        token: &str,
    ) -> Result<Option<verification_token::Model>> {
        let key = (identifier.to_string(), token.to_string());
        let txn = self.db.begin().await?;

        let Some(found) = verification_token::Entity::find_by_id(key.clone())
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        verification_token::Entity::delete_by_id(key)
            .exec(&txn)
            .await?;
        txn.commit().await?;

        Ok(Some(found))
    }

    // Authenticators

    pub async fn create_authenticator(
        &self,
        new_authenticator: NewAuthenticator,
    ) -> Result<authenticator::Model> {
        let active = authenticator::ActiveModel {
            user_id: Set(new_authenticator.user_id),
            credential_id: Set(new_authenticator.credential_id),
            provider_account_id: Set(new_authenticator.provider_account_id),
            credential_public_key: Set(new_authenticator.credential_public_key),
            counter: Set(new_authenticator.counter),
            credential_device_type: Set(new_authenticator.credential_device_type),
            credential_backed_up: Set(new_authenticator.credential_backed_up),
            transports: Set(new_authenticator.transports),
        };

        Ok(active.insert(&self.db).await?)
    }

    pub async fn get_authenticator(
        &self,
        credential_id: &str,
    ) -> Result<Option<authenticator::Model>> {
        Ok(authenticator::Entity::find()
            .filter(authenticator::Column::CredentialId.eq(credential_id))
            .one(&self.db)
            .await?)
    }

    pub async fn list_authenticators_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<authenticator::Model>> {
        Ok(authenticator::Entity::find()
            .filter(authenticator::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?)
    }

    /// Stores the counter as given; clone detection happens in the auth flow.
    pub async fn update_authenticator_counter(
        &self,
        credential_id: &str,
        counter: i64,
    ) -> Result<authenticator::Model> {
        let existing = self
            .get_authenticator(credential_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("authenticator {credential_id}")))?;

        let mut active = existing.into_active_model();
        active.counter = Set(counter);
        Ok(active.update(&self.db).await?)
    }

    // Stored content

    pub async fn save_content(&self, new_content: NewContent) -> Result<stored_content::Model> {
        let active = stored_content::ActiveModel {
            id: NotSet,
            content: Set(new_content.content),
            title: Set(new_content.title),
            description: Set(new_content.description),
            url: Set(new_content.url),
            saved_at: Set(new_content.saved_at.timestamp()),
            base_url: Set(new_content.base_url),
            og_image: Set(new_content.og_image),
            content_type: match new_content.content_type {
                Some(content_type) => Set(Some(content_type)),
                None => NotSet,
            },
            image: Set(new_content.image),
            user_id: Set(new_content.user_id),
        };

        let saved = active.insert(&self.db).await?;
        debug!(content_id = saved.id, url = %saved.url, "content saved");
        Ok(saved)
    }

    pub async fn get_content(&self, content_id: i32) -> Result<Option<stored_content::Model>> {
        Ok(stored_content::Entity::find_by_id(content_id)
            .one(&self.db)
            .await?)
    }

    pub async fn list_content_for_user(&self, user_id: &str) -> Result<Vec<StoredContent>> {
        let rows = stored_content::Entity::find()
            .filter(stored_content::Column::UserId.eq(user_id))
            .order_by_desc(stored_content::Column::SavedAt)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(StoredContent::from).collect())
    }

    pub async fn find_content_by_url(&self, url: &str) -> Result<Vec<stored_content::Model>> {
        Ok(stored_content::Entity::find()
            .filter(stored_content::Column::Url.eq(url))
            .order_by_desc(stored_content::Column::SavedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn delete_content(&self, content_id: i32) -> Result<()> {
        let result = stored_content::Entity::delete_by_id(content_id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("content {content_id}")));
        }

        info!(content_id, "content deleted");
        Ok(())
    }

    // Spaces

    /// A missing name falls back to the column default, `none`.
    pub async fn create_space(
        &self,
        name: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<StoredSpace> {
        let active = space::ActiveModel {
            id: NotSet,
            name: match name {
                Some(name) => Set(name.to_string()),
                None => NotSet,
            },
            user_id: Set(user_id.map(str::to_string)),
        };

        Ok(active.insert(&self.db).await?)
    }

    pub async fn get_space(&self, space_id: i32) -> Result<Option<StoredSpace>> {
        Ok(space::Entity::find_by_id(space_id).one(&self.db).await?)
    }

    pub async fn find_space_by_name(&self, name: &str) -> Result<Option<StoredSpace>> {
        Ok(space::Entity::find()
            .filter(space::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    pub async fn list_spaces_for_user(&self, user_id: &str) -> Result<Vec<StoredSpace>> {
        Ok(space::Entity::find()
            .filter(space::Column::UserId.eq(user_id))
            .order_by_asc(space::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn delete_space(&self, space_id: i32) -> Result<()> {
        let result = space::Entity::delete_by_id(space_id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("space {space_id}")));
        }

        info!(space_id, "space deleted");
        Ok(())
    }

    // Content <-> space links

    pub async fn add_content_to_space(
        &self,
        content_id: i32,
        space_id: i32,
    ) -> Result<content_to_space::Model> {
        let active = content_to_space::ActiveModel {
            content_id: Set(content_id),
            space_id: Set(space_id),
        };

        Ok(active.insert(&self.db).await?)
    }

    pub async fn remove_content_from_space(&self, content_id: i32, space_id: i32) -> Result<()> {
        let result = content_to_space::Entity::delete_by_id((content_id, space_id))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "content {content_id} in space {space_id}"
            )));
        }
        Ok(())
    }

    /// Everything placed in a space, newest first.
    pub async fn get_space_content(&self, space_id: i32) -> Result<Vec<CachedSpaceContent>> {
        let rows = stored_content::Entity::find()
            .inner_join(content_to_space::Entity)
            .filter(content_to_space::Column::SpaceId.eq(space_id))
            .order_by_desc(stored_content::Column::SavedAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| CachedSpaceContent::new(row, space_id))
            .collect())
    }

    pub async fn spaces_for_content(&self, content_id: i32) -> Result<Vec<StoredSpace>> {
        let Some(content) = self.get_content(content_id).await? else {
            return Err(AppError::NotFound(format!("content {content_id}")));
        };

        Ok(content
            .find_related(space::Entity)
            .order_by_asc(space::Column::Name)
            .all(&self.db)
            .await?)
    }
}
