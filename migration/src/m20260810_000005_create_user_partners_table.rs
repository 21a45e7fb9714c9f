use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPartners::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserPartners::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserPartners::PartnerId).uuid().not_null())
                    .col(ColumnDef::new(UserPartners::ChildId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserPartners::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_user_partners")
                            .col(UserPartners::UserId)
                            .col(UserPartners::PartnerId)
                            .col(UserPartners::ChildId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_partners_user_id")
                            .from(UserPartners::Table, UserPartners::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_partners_partner_id")
                            .from(UserPartners::Table, UserPartners::PartnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_partners_child_id")
                            .from(UserPartners::Table, UserPartners::ChildId)
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
                CREATE INDEX idx_user_partners_user_id
                ON user_partners (user_id);
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
                DROP INDEX IF EXISTS idx_user_partners_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserPartners::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserPartners {
    Table,
    UserId,
    PartnerId,
    ChildId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Children {
    Table,
    Id,
}
