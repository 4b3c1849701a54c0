use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Client-supplied identifier, stable across installs.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub username: String,
    /// Monotonically non-decreasing aggregate, only ever max-merged.
    pub total_playtime: i64,
    /// Epoch milliseconds, server-assigned at first registration.
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
    #[sea_orm(has_many = "super::save_file::Entity")]
    SaveFile,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::save_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SaveFile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
