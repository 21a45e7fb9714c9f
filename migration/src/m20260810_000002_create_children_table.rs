use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Children::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Children::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Children::Name).string_len(60).not_null())
                    .col(ColumnDef::new(Children::Nickname).string_len(60))
                    .col(ColumnDef::new(Children::Dob).date().not_null())
                    .col(ColumnDef::new(Children::Gender).string_len(10))
                    .col(ColumnDef::new(Children::Slug).string_len(80).not_null())
                    .col(ColumnDef::new(Children::ParentId).uuid().not_null())
                    .col(ColumnDef::new(Children::PartnerParentId).uuid())
                    .col(
                        ColumnDef::new(Children::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Children::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_children_parent_id")
                            .from(Children::Table, Children::ParentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_children_partner_parent_id")
                            .from(Children::Table, Children::PartnerParentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Owner-scoped queries are the hot path for every child endpoint.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_children_parent_id
                ON children (parent_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_children_partner_parent_id
                ON children (partner_parent_id)
                WHERE partner_parent_id IS NOT NULL;
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
                DROP INDEX IF EXISTS idx_children_parent_id;
                DROP INDEX IF EXISTS idx_children_partner_parent_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Children::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Children {
    Table,
    Id,
    Name,
    Nickname,
    Dob,
    Gender,
    Slug,
    ParentId,
    PartnerParentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
