use sea_orm_migration::{prelude::*, schema::*};

use super::m20260612_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SaveFiles::Table)
                    .if_not_exists()
                    .col(pk_auto(SaveFiles::SaveId))
                    .col(string(SaveFiles::UserId))
                    .col(json(SaveFiles::LevelData))
                    .col(json(SaveFiles::InventoryData))
                    .col(big_integer(SaveFiles::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_save_files_user_id")
                            .from(SaveFiles::Table, SaveFiles::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SaveFiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SaveFiles {
    Table,
    SaveId,
    UserId,
    LevelData,
    InventoryData,
    UpdatedAt,
}
