use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    /// Server-assigned, carries insertion order.
    #[sea_orm(primary_key)]
    pub event_id: i32,
    pub session_id: String,
    pub event_type: String,
    pub x_coord: f64,
    pub y_coord: f64,
    /// Epoch milliseconds, assigned at ingestion from the server clock.
    pub timestamp: i64,
    pub meta_data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::session::Entity",
        from = "Column::SessionId",
        to = "super::session::Column::SessionId"
    )]
    Session,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
