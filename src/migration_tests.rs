// ABOUTME: Tests for the migrated schema itself, bypassing the typed storage layer
// ABOUTME: Checks the content type CHECK, named indexes, defaults and rollback

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use sea_orm_migration::{MigratorTrait, SchemaManager};
use tempfile::TempDir;

use crate::migration::Migrator;
use crate::storage::Storage;

async fn migrated_db() -> (DatabaseConnection, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("schema.db");
    let db = Database::connect(format!("sqlite:{}?mode=rwc", db_path.display()))
        .await
        .unwrap();
    Migrator::up(&db, None).await.unwrap();

    let storage = Storage::from_connection(db);
    (storage.db, temp_dir)
}

async fn index_names(db: &DatabaseConnection, table: &str) -> Vec<String> {
    let rows = db
        .query_all(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = ?",
            [table.into()],
        ))
        .await
        .unwrap();

    rows.iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
}

#[tokio::test]
async fn test_content_type_outside_enumeration_is_rejected() {
    let (db, _temp_dir) = migrated_db().await;

    let result = db
        .execute_unprepared(
            "INSERT INTO storedContent (content, url, savedAt, type) \
             VALUES ('body', 'https://example.com', 1, 'video')",
        )
        .await;
    assert!(result.is_err());

    for accepted in ["note", "page", "twitter-bookmark"] {
        db.execute_unprepared(&format!(
            "INSERT INTO storedContent (content, url, savedAt, type) \
             VALUES ('body', 'https://example.com/{accepted}', 1, '{accepted}')"
        ))
        .await
        .unwrap();
    }
}

#[tokio::test]
async fn test_omitted_type_defaults_to_page() {
    let (db, _temp_dir) = migrated_db().await;

    db.execute_unprepared(
        "INSERT INTO storedContent (content, url, savedAt) VALUES ('body', 'https://example.com', 1)",
    )
    .await
    .unwrap();

    let row = db
        .query_one(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT type FROM storedContent",
        ))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.try_get::<String>("", "type").unwrap(), "page");
}

#[tokio::test]
async fn test_secondary_indexes_exist() {
    let (db, _temp_dir) = migrated_db().await;

    let content_indexes = index_names(&db, "storedContent").await;
    for expected in [
        "storedContent_url_idx",
        "storedContent_savedAt_idx",
        "storedContent_title_idx",
        "storedContent_user_idx",
    ] {
        assert!(
            content_indexes.iter().any(|name| name == expected),
            "missing {expected} in {content_indexes:?}"
        );
    }

    let space_indexes = index_names(&db, "space").await;
    assert!(space_indexes.iter().any(|name| name == "spaces_name_idx"));
    assert!(space_indexes.iter().any(|name| name == "spaces_user_idx"));
}

#[tokio::test]
async fn test_table_names_are_kept_verbatim() {
    let (db, _temp_dir) = migrated_db().await;
    let manager = SchemaManager::new(&db);

    for table in [
        "user",
        "account",
        "session",
        "verificationToken",
        "authenticator",
        "storedContent",
        "space",
        "contentToSpace",
    ] {
        assert!(manager.has_table(table).await.unwrap(), "missing table {table}");
    }

    assert!(manager.has_column("authenticator", "credentialID").await.unwrap());
    assert!(manager.has_column("account", "providerAccountId").await.unwrap());
    assert!(manager.has_column("storedContent", "user").await.unwrap());
}

#[tokio::test]
async fn test_rollback_and_reapply() {
    let (db, _temp_dir) = migrated_db().await;

    Migrator::down(&db, None).await.unwrap();
    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("user").await.unwrap());
    assert!(!manager.has_table("contentToSpace").await.unwrap());

    Migrator::up(&db, None).await.unwrap();
    assert!(manager.has_table("contentToSpace").await.unwrap());
    assert_eq!(Migrator::get_pending_migrations(&db).await.unwrap().len(), 0);
}
