//! Session factory for creating test session entities.
//!
//! This module provides factory methods for creating session entities with sensible
//! defaults. The owning user must already exist; use
//! `helpers::create_session_with_user` to create both in one call.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::session::SessionFactory;
///
/// let session = SessionFactory::new(&db, &user.user_id)
///     .session_id("s1")
///     .os_info("Windows 11")
///     .build()
///     .await?;
/// ```
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    session_id: String,
    user_id: String,
    os_info: String,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory with default values.
    ///
    /// Defaults:
    /// - session_id: `"session_{id}"` where id is auto-incremented
    /// - os_info: `"TestOS"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of an existing user that owns the session
    ///
    /// # Returns
    /// - `SessionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            session_id: format!("session_{}", id),
            user_id: user_id.to_string(),
            os_info: "TestOS".to_string(),
        }
    }

    /// Sets the session ID.
    ///
    /// # Arguments
    /// - `session_id` - Client-supplied session identifier
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Sets the reported operating system string.
    ///
    /// # Arguments
    /// - `os_info` - OS description reported by the client
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn os_info(mut self, os_info: impl Into<String>) -> Self {
        self.os_info = os_info.into();
        self
    }

    /// Builds and inserts the session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            session_id: ActiveValue::Set(self.session_id),
            user_id: ActiveValue::Set(self.user_id),
            start_time: ActiveValue::Set(Utc::now().timestamp_millis()),
            end_time: ActiveValue::Set(None),
            duration_seconds: ActiveValue::Set(0),
            os_info: ActiveValue::Set(self.os_info),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a session with default values for an existing user.
///
/// Shorthand for `SessionFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of an existing user that owns the session
///
/// # Returns
/// - `Ok(entity::session::Model)` - Created session entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, user_id).build().await
}
