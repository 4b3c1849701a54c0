//! Save-file data repository for database operations.
//!
//! Save snapshots are an append-only log: every upload inserts a new row, and
//! nothing is updated in place.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

use crate::server::model::save_file::SaveFile;

/// Repository providing database operations for save snapshots.
pub struct SaveFileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SaveFileRepository<'a> {
    /// Creates a new SaveFileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SaveFileRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one save snapshot row.
    ///
    /// # Arguments
    /// - `user_id` - Owning user; must already exist
    /// - `level_data` - Opaque level payload, stored verbatim
    /// - `inventory_data` - Opaque inventory payload, stored verbatim
    /// - `updated_at` - Server-assigned upload timestamp in epoch milliseconds
    ///
    /// # Returns
    /// - `Ok(SaveFile)` - The stored snapshot with its assigned id
    /// - `Err(DbErr)` - Unknown user or other database error
    pub async fn insert_snapshot(
        &self,
        user_id: &str,
        level_data: Value,
        inventory_data: Value,
        updated_at: i64,
    ) -> Result<SaveFile, DbErr> {
        let entity = entity::save_file::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            level_data: ActiveValue::Set(level_data),
            inventory_data: ActiveValue::Set(inventory_data),
            updated_at: ActiveValue::Set(updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SaveFile::from_entity(entity))
    }
}
