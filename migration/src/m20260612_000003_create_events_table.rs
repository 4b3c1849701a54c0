use sea_orm_migration::{prelude::*, schema::*};

use super::m20260612_000002_create_sessions_table::Sessions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::EventId))
                    .col(string(Events::SessionId))
                    .col(string(Events::EventType))
                    .col(double(Events::XCoord))
                    .col(double(Events::YCoord))
                    .col(big_integer(Events::Timestamp))
                    .col(json(Events::MetaData))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_session_id")
                            .from(Events::Table, Events::SessionId)
                            .to(Sessions::Table, Sessions::SessionId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    EventId,
    SessionId,
    EventType,
    XCoord,
    YCoord,
    Timestamp,
    MetaData,
}
