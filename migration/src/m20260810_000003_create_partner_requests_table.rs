use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartnerRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PartnerRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PartnerRequests::ChildId).uuid().not_null())
                    .col(
                        ColumnDef::new(PartnerRequests::Name)
                            .string_len(60)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PartnerRequests::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PartnerRequests::Status)
                            .string_len(10)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(PartnerRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partner_requests_child_id")
                            .from(PartnerRequests::Table, PartnerRequests::ChildId)
                            .to(Children::Table, Children::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Accept/reject match on (child, request, email, status) in one update.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_partner_requests_child_id
                ON partner_requests (child_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_partner_requests_pending_email
                ON partner_requests (child_id, email)
                WHERE status = 'pending';
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
                DROP INDEX IF EXISTS idx_partner_requests_child_id;
                DROP INDEX IF EXISTS idx_partner_requests_pending_email;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartnerRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PartnerRequests {
    Table,
    Id,
    ChildId,
    Name,
    Email,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Children {
    Table,
    Id,
}
