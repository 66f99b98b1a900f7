// ABOUTME: Migration creating the authentication adapter tables
// ABOUTME: user, account, session, verificationToken and authenticator with cascading FKs

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(User::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(User::Name).text())
                    .col(ColumnDef::new(User::Email).text().not_null())
                    .col(ColumnDef::new(User::EmailVerified).big_integer())
                    .col(ColumnDef::new(User::Image).text())
                    .to_owned(),
            )
            .await?;

        // Composite key: one local row per provider identity
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Account::UserId).text().not_null())
                    .col(ColumnDef::new(Account::Type).text().not_null())
                    .col(ColumnDef::new(Account::Provider).text().not_null())
                    .col(ColumnDef::new(Account::ProviderAccountId).text().not_null())
                    .col(ColumnDef::new(Account::RefreshToken).text())
                    .col(ColumnDef::new(Account::AccessToken).text())
                    .col(ColumnDef::new(Account::ExpiresAt).big_integer())
                    .col(ColumnDef::new(Account::TokenType).text())
                    .col(ColumnDef::new(Account::Scope).text())
                    .col(ColumnDef::new(Account::IdToken).text())
                    .col(ColumnDef::new(Account::SessionState).text())
                    .primary_key(
                        Index::create()
                            .col(Account::Provider)
                            .col(Account::ProviderAccountId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_user_id")
                            .from(Account::Table, Account::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Session::SessionToken).text().not_null().primary_key())
                    .col(ColumnDef::new(Session::UserId).text().not_null())
                    .col(ColumnDef::new(Session::Expires).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_user_id")
                            .from(Session::Table, Session::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VerificationToken::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VerificationToken::Identifier).text().not_null())
                    .col(ColumnDef::new(VerificationToken::Token).text().not_null())
                    .col(ColumnDef::new(VerificationToken::Expires).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(VerificationToken::Identifier)
                            .col(VerificationToken::Token),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Authenticator::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authenticator::CredentialId)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Authenticator::UserId).text().not_null())
                    .col(ColumnDef::new(Authenticator::ProviderAccountId).text().not_null())
                    .col(ColumnDef::new(Authenticator::CredentialPublicKey).text().not_null())
                    .col(ColumnDef::new(Authenticator::Counter).big_integer().not_null())
                    .col(ColumnDef::new(Authenticator::CredentialDeviceType).text().not_null())
                    .col(ColumnDef::new(Authenticator::CredentialBackedUp).boolean().not_null())
                    .col(ColumnDef::new(Authenticator::Transports).text())
                    .primary_key(
                        Index::create()
                            .col(Authenticator::UserId)
                            .col(Authenticator::CredentialId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_authenticator_user_id")
                            .from(Authenticator::Table, Authenticator::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authenticator::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(VerificationToken::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Name,
    Email,
    #[sea_orm(iden = "emailVerified")]
    EmailVerified,
    Image,
}

#[derive(DeriveIden)]
enum Account {
    Table,
    #[sea_orm(iden = "userId")]
    UserId,
    Type,
    Provider,
    #[sea_orm(iden = "providerAccountId")]
    ProviderAccountId,
    RefreshToken,
    AccessToken,
    ExpiresAt,
    TokenType,
    Scope,
    IdToken,
    SessionState,
}

#[derive(DeriveIden)]
enum Session {
    Table,
    #[sea_orm(iden = "sessionToken")]
    SessionToken,
    #[sea_orm(iden = "userId")]
    UserId,
    Expires,
}

#[derive(DeriveIden)]
enum VerificationToken {
    #[sea_orm(iden = "verificationToken")]
    Table,
    Identifier,
    Token,
    Expires,
}

#[derive(DeriveIden)]
enum Authenticator {
    Table,
    #[sea_orm(iden = "credentialID")]
    CredentialId,
    #[sea_orm(iden = "userId")]
    UserId,
    #[sea_orm(iden = "providerAccountId")]
    ProviderAccountId,
    #[sea_orm(iden = "credentialPublicKey")]
    CredentialPublicKey,
    Counter,
    #[sea_orm(iden = "credentialDeviceType")]
    CredentialDeviceType,
    #[sea_orm(iden = "credentialBackedUp")]
    CredentialBackedUp,
    Transports,
}
