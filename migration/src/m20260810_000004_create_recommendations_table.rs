use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recommendations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recommendations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recommendations::ChildId).uuid().not_null())
                    .col(
                        ColumnDef::new(Recommendations::Recommendation)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Recommendations::Inputs)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Recommendations::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Recommendations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recommendations_child_id")
                            .from(Recommendations::Table, Recommendations::ChildId)
                            .to(Children::Table, Children::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_recommendations_child_id
                ON recommendations (child_id, created_at);
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
                DROP INDEX IF EXISTS idx_recommendations_child_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recommendations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recommendations {
    Table,
    Id,
    ChildId,
    Recommendation,
    Inputs,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Children {
    Table,
    Id,
}
