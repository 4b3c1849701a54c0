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
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(string(Sessions::SessionId).primary_key())
                    .col(string(Sessions::UserId))
                    .col(big_integer(Sessions::StartTime))
                    .col(big_integer_null(Sessions::EndTime))
                    .col(big_integer(Sessions::DurationSeconds).default(0))
                    .col(text(Sessions::OsInfo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_user_id")
                            .from(Sessions::Table, Sessions::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sessions {
    Table,
    SessionId,
    UserId,
    StartTime,
    EndTime,
    DurationSeconds,
    OsInfo,
}
