// ABOUTME: Stored content entity for saved pages, notes and bookmarked tweets
// ABOUTME: Optionally owned by a user and linked to spaces through contentToSpace

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// What kind of item was saved. The database rejects anything else with a CHECK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    #[sea_orm(string_value = "note")]
    Note,
    #[sea_orm(string_value = "page")]
    Page,
    #[sea_orm(string_value = "twitter-bookmark")]
    TwitterBookmark,
}

impl ContentType {
    pub const ALL: [&'static str; 3] = ["note", "page", "twitter-bookmark"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Note => "note",
            ContentType::Page => "page",
            ContentType::TwitterBookmark => "twitter-bookmark",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "note" => Ok(ContentType::Note),
            "page" => Ok(ContentType::Page),
            "twitter-bookmark" => Ok(ContentType::TwitterBookmark),
            other => Err(AppError::InvalidContentType(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "storedContent")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub content: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    /// Seconds since the Unix epoch.
    #[sea_orm(column_name = "savedAt")]
    pub saved_at: i64,
    #[sea_orm(column_name = "baseUrl")]
    pub base_url: Option<String>,
    #[sea_orm(column_name = "ogImage")]
    pub og_image: Option<String>,
    #[sea_orm(column_name = "type")]
    pub content_type: Option<ContentType>,
    pub image: Option<String>,
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

impl Related<super::space::Entity> for Entity {
    fn to() -> RelationDef {
        super::content_to_space::Relation::Space.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::content_to_space::Relation::StoredContent.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("note", ContentType::Note)]
    #[case("page", ContentType::Page)]
    #[case("twitter-bookmark", ContentType::TwitterBookmark)]
    fn parses_known_types(#[case] raw: &str, #[case] expected: ContentType) {
        let parsed: ContentType = raw.parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), raw);
    }

    #[rstest]
    #[case("video")]
    #[case("Page")]
    #[case("")]
    fn rejects_unknown_types(#[case] raw: &str) {
        let err = raw.parse::<ContentType>().unwrap_err();
        assert!(matches!(err, AppError::InvalidContentType(_)));
    }

    #[test]
    fn serde_uses_stored_values() {
        let json = serde_json::to_string(&ContentType::TwitterBookmark).unwrap();
        assert_eq!(json, "\"twitter-bookmark\"");
    }
}
