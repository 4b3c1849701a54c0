//! Save snapshot domain model and upload parameters.

use serde_json::Value;

/// One uploaded save snapshot.
///
/// Snapshots form an append-only log: every upload inserts a new row and
/// nothing is updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveFile {
    /// Server-assigned snapshot identifier.
    pub save_id: i32,
    /// Owning user.
    pub user_id: String,
    /// Opaque level payload, stored verbatim.
    pub level_data: Value,
    /// Opaque inventory payload, stored verbatim.
    pub inventory_data: Value,
    /// Epoch milliseconds, server-assigned at upload.
    pub updated_at: i64,
}

impl SaveFile {
    /// Converts an entity model to a save-file domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `SaveFile` - The converted save-file domain model
    pub fn from_entity(entity: entity::save_file::Model) -> Self {
        Self {
            save_id: entity.save_id,
            user_id: entity.user_id,
            level_data: entity.level_data,
            inventory_data: entity.inventory_data,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for uploading a save snapshot.
///
/// The raw `save_data` document is carried whole; the service extracts the
/// level/inventory sections and the optional cumulative playtime field.
#[derive(Debug, Clone)]
pub struct UploadSaveParam {
    /// Owning user; must already exist.
    pub user_id: String,
    /// Opaque save document as submitted by the client.
    pub save_data: Value,
}
