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
                    .col(
                        ColumnDef::new(User::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(User::Email)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Username)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Description)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Salt)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::PasswordHash)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::SessionToken)
                            .string()
                            .not_null()
                    )
                    .col(ColumnDef::new(User::PhotoUrl).string())
                    .col(ColumnDef::new(User::PhotoId).string())
                    .col(ColumnDef::new(User::ResetToken).string())
                    .col(ColumnDef::new(User::ResetTokenIssuedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(User::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        // Uniqueness lives here, not only in the application check. Two
        // concurrent signups can both pass the pre-check; the second insert
        // must fail at the store.
        manager
            .create_index(
                Index::create()
                    .name("idx-user-email-unique")
                    .table(User::Table)
                    .col(User::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-user-username-unique")
                    .table(User::Table)
                    .col(User::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;
        // Bearer resolution and reset redemption both look up by token.
        manager
            .create_index(
                Index::create()
                    .name("idx-user-session-token")
                    .table(User::Table)
                    .col(User::SessionToken)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-user-reset-token")
                    .table(User::Table)
                    .col(User::ResetToken)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(User::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Email,
    Username,
    Name,
    Description,
    Salt,
    PasswordHash,
    SessionToken,
    PhotoUrl,
    PhotoId,
    ResetToken,
    ResetTokenIssuedAt,
    CreatedAt,
    UpdatedAt,
}
