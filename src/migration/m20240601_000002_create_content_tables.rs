// ABOUTME: Migration creating storedContent, space and the contentToSpace join table
// ABOUTME: Adds the content type CHECK and the lookup/sort indexes used by content queries

use sea_orm_migration::prelude::*;

use crate::entities::ContentType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoredContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StoredContent::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StoredContent::Content).text().not_null())
                    .col(ColumnDef::new(StoredContent::Title).string_len(255))
                    .col(ColumnDef::new(StoredContent::Description).string_len(255))
                    .col(ColumnDef::new(StoredContent::Url).text().not_null())
                    .col(ColumnDef::new(StoredContent::SavedAt).big_integer().not_null())
                    .col(ColumnDef::new(StoredContent::BaseUrl).string_len(255))
                    .col(ColumnDef::new(StoredContent::OgImage).string_len(255))
                    .col(
                        ColumnDef::new(StoredContent::Type)
                            .text()
                            .default(ContentType::Page.as_str())
                            .check(Expr::col(StoredContent::Type).is_in(ContentType::ALL)),
                    )
                    .col(ColumnDef::new(StoredContent::Image).string_len(255))
                    .col(ColumnDef::new(StoredContent::User).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stored_content_user")
                            .from(StoredContent::Table, StoredContent::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("storedContent_url_idx", StoredContent::Url),
            ("storedContent_savedAt_idx", StoredContent::SavedAt),
            ("storedContent_title_idx", StoredContent::Title),
            ("storedContent_user_idx", StoredContent::User),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(StoredContent::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(Space::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Space::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Space::Name)
                            .text()
                            .not_null()
                            .unique_key()
                            .default("none"),
                    )
                    .col(ColumnDef::new(Space::User).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_space_user")
                            .from(Space::Table, Space::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [("spaces_name_idx", Space::Name), ("spaces_user_idx", Space::User)] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Space::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(ContentToSpace::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ContentToSpace::ContentId).integer().not_null())
                    .col(ColumnDef::new(ContentToSpace::SpaceId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ContentToSpace::ContentId)
                            .col(ContentToSpace::SpaceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_to_space_content_id")
                            .from(ContentToSpace::Table, ContentToSpace::ContentId)
                            .to(StoredContent::Table, StoredContent::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_to_space_space_id")
                            .from(ContentToSpace::Table, ContentToSpace::SpaceId)
                            .to(Space::Table, Space::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentToSpace::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Space::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StoredContent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum StoredContent {
    #[sea_orm(iden = "storedContent")]
    Table,
    Id,
    Content,
    Title,
    Description,
    Url,
    #[sea_orm(iden = "savedAt")]
    SavedAt,
    #[sea_orm(iden = "baseUrl")]
    BaseUrl,
    #[sea_orm(iden = "ogImage")]
    OgImage,
    Type,
    Image,
    User,
}

#[derive(DeriveIden)]
enum Space {
    Table,
    Id,
    Name,
    User,
}

#[derive(DeriveIden)]
enum ContentToSpace {
    #[sea_orm(iden = "contentToSpace")]
    Table,
    #[sea_orm(iden = "contentId")]
    ContentId,
    #[sea_orm(iden = "spaceId")]
    SpaceId,
}
