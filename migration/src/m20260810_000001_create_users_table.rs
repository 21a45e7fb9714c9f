use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string_len(60).not_null())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(60)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Slug).string_len(80).not_null())
                    .col(ColumnDef::new(Users::Gender).string_len(10))
                    .col(ColumnDef::new(Users::Bio).string_len(250))
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(10)
                            .not_null()
                            .default("user"),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::PasswordChangedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Users::PasswordResetToken).string_len(64))
                    .col(ColumnDef::new(Users::PasswordResetExpires).timestamp_with_time_zone())
                    .col(ColumnDef::new(Users::VerificationToken).string_len(64))
                    .col(ColumnDef::new(Users::VerificationTokenExpires).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Users::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::LastLogin).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Token lookups happen on the hashed value; both are single-use paths.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_verification_token
                ON users (verification_token)
                WHERE verification_token IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_password_reset_token
                ON users (password_reset_token)
                WHERE password_reset_token IS NOT NULL;
                "#,
            )
            .await?;

        // Default list queries only see active accounts.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_active
                ON users (id)
                WHERE active = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_users_verification_token;
                DROP INDEX IF EXISTS idx_users_password_reset_token;
                DROP INDEX IF EXISTS idx_users_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Username,
    Email,
    Slug,
    Gender,
    Bio,
    Role,
    PasswordHash,
    PasswordChangedAt,
    PasswordResetToken,
    PasswordResetExpires,
    VerificationToken,
    VerificationTokenExpires,
    IsVerified,
    Active,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}
