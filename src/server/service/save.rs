//! Save snapshot service and playtime reconciliation side channel.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::server::{
    data::{save_file::SaveFileRepository, user::UserRepository},
    error::AppError,
    model::save_file::UploadSaveParam,
};

/// Field inside the uploaded save document carrying cumulative playtime.
const PLAYTIME_FIELD: &str = "totalPlaytimeSeconds";

/// Service providing save snapshot persistence.
pub struct SaveService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SaveService<'a> {
    /// Creates a new SaveService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SaveService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a save snapshot and reconciles the reported playtime.
    ///
    /// Always inserts a new snapshot row; uploads never update in place. When
    /// the save document carries a cumulative playtime, it is max-merged into
    /// the user's total. Saves are the crash-recovery channel for playtime: a
    /// client that never ends its session cleanly still converges through here.
    ///
    /// # Arguments
    /// - `param` - Upload parameters (user id and raw save document)
    ///
    /// # Returns
    /// - `Ok(())` - Snapshot stored, playtime reconciled if reported
    /// - `Err(AppError::DbErr)` - Unknown user or other database error
    pub async fn upload(&self, param: UploadSaveParam) -> Result<(), AppError> {
        let save_repo = SaveFileRepository::new(self.db);

        let level_data = param
            .save_data
            .get("level_data")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let inventory_data = param
            .save_data
            .get("inventory_data")
            .cloned()
            .unwrap_or_else(|| json!({}));

        save_repo
            .insert_snapshot(
                &param.user_id,
                level_data,
                inventory_data,
                Utc::now().timestamp_millis(),
            )
            .await?;

        if let Some(candidate) = param.save_data.get(PLAYTIME_FIELD).and_then(Value::as_i64) {
            let user_repo = UserRepository::new(self.db);
            user_repo
                .sync_playtime_if_higher(&param.user_id, candidate)
                .await?;
        }

        Ok(())
    }
}
