// ABOUTME: Input records for storage writes and read-side projections of stored rows
// ABOUTME: Includes the owner-less content projection and the cached space content shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{space, stored_content, AccountType, ContentType};

// Auth adapter inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub id: Option<String>, // Generated when absent
    pub name: Option<String>,
    pub email: String,
    pub email_verified: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

/// Profile changes. `None` leaves a column untouched; `Some(None)` clears a nullable one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<Option<String>>,
    pub email: Option<String>,
    pub email_verified: Option<Option<DateTime<Utc>>>,
    pub image: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub user_id: String,
    pub account_type: AccountType,
    pub provider: String,
    pub provider_account_id: String,
    pub refresh_token: Option<String>,
    pub access_token: Option<String>,
    pub expires_at: Option<i64>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub id_token: Option<String>,
    pub session_state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuthenticator {
    pub credential_id: String,
    pub user_id: String,
    pub provider_account_id: String,
    pub credential_public_key: String,
    pub counter: i64,
    pub credential_device_type: String,
    pub credential_backed_up: bool,
    pub transports: Option<String>,
}

// Content inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContent {
    pub content: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub saved_at: DateTime<Utc>,
    pub base_url: Option<String>,
    pub og_image: Option<String>,
    pub content_type: Option<ContentType>, // Database default is "page"
    pub image: Option<String>,
    pub user_id: Option<String>,
}

/// A stored content row without its owner column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredContent {
    pub id: i32,
    pub content: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub saved_at: i64,
    pub base_url: Option<String>,
    pub og_image: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
    pub image: Option<String>,
}

impl From<stored_content::Model> for StoredContent {
    fn from(model: stored_content::Model) -> Self {
        Self {
            id: model.id,
            content: model.content,
            title: model.title,
            description: model.description,
            url: model.url,
            saved_at: model.saved_at,
            base_url: model.base_url,
            og_image: model.og_image,
            content_type: model.content_type,
            image: model.image,
        }
    }
}

pub type StoredSpace = space::Model;

/// Content projection tagged with the space it was read through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedSpaceContent {
    #[serde(flatten)]
    pub content: StoredContent,
    pub space: i32,
}

impl CachedSpaceContent {
    pub fn new(model: stored_content::Model, space: i32) -> Self {
        Self {
            content: model.into(),
            space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> stored_content::Model {
        stored_content::Model {
            id: 7,
            content: "body".to_string(),
            title: Some("Title".to_string()),
            description: None,
            url: "https://example.com/a".to_string(),
            saved_at: 1_700_000_000,
            base_url: Some("https://example.com".to_string()),
            og_image: None,
            content_type: Some(ContentType::TwitterBookmark),
            image: None,
            user_id: Some("owner".to_string()),
        }
    }

    #[test]
    fn projection_drops_owner() {
        let json = serde_json::to_value(StoredContent::from(sample_model())).unwrap();
        assert!(json.get("user").is_none());
        assert!(json.get("userId").is_none());
        assert_eq!(json["savedAt"], 1_700_000_000);
        assert_eq!(json["type"], "twitter-bookmark");
    }

    #[test]
    fn cached_space_content_flattens_projection() {
        let cached = CachedSpaceContent::new(sample_model(), 3);
        let json = serde_json::to_value(&cached).unwrap();
        assert_eq!(json["space"], 3);
        assert_eq!(json["id"], 7);
        assert_eq!(json["url"], "https://example.com/a");
    }
}
