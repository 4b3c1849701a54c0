//! Session data repository for database operations.
//!
//! This module provides the `SessionRepository` for the session lifecycle:
//! creation on start, close on end, and owner lookup for playtime syncing.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::session::Session;

/// Repository providing database operations for session management.
pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    /// Creates a new SessionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SessionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new open session.
    ///
    /// The owning user row must exist before this is called. A duplicate
    /// `session_id` is a primary-key collision and surfaces as a datastore
    /// error rather than being silently ignored.
    ///
    /// # Arguments
    /// - `session_id` - Client-supplied session identifier
    /// - `user_id` - Owning user
    /// - `start_time` - Server-assigned start timestamp in epoch milliseconds
    /// - `os_info` - Operating system string reported by the client
    ///
    /// # Returns
    /// - `Ok(Session)` - The created session
    /// - `Err(DbErr)` - Duplicate session id or other database error
    pub async fn create(
        &self,
        session_id: &str,
        user_id: &str,
        start_time: i64,
        os_info: &str,
    ) -> Result<Session, DbErr> {
        let entity = entity::session::ActiveModel {
            session_id: ActiveValue::Set(session_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(None),
            duration_seconds: ActiveValue::Set(0),
            os_info: ActiveValue::Set(os_info.to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(Session::from_entity(entity))
    }

    /// Closes a session, setting its end time and reported duration.
    ///
    /// Affects zero rows when the session id is unknown; callers treat that as
    /// an informational no-op, not a failure. Re-closing an already closed
    /// session overwrites the end time and duration.
    ///
    /// # Arguments
    /// - `session_id` - Session to close
    /// - `end_time` - Server-assigned end timestamp in epoch milliseconds
    /// - `duration_seconds` - Client-reported duration of the session
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 for an unknown session)
    /// - `Err(DbErr)` - Database error during update
    pub async fn close(
        &self,
        session_id: &str,
        end_time: i64,
        duration_seconds: i64,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::update_many()
            .col_expr(entity::session::Column::EndTime, Expr::value(end_time))
            .col_expr(
                entity::session::Column::DurationSeconds,
                Expr::value(duration_seconds),
            )
            .filter(entity::session::Column::SessionId.eq(session_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Looks up the user owning a session.
    ///
    /// # Arguments
    /// - `session_id` - Session to look up
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Owning user id
    /// - `Ok(None)` - No session with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_owner(&self, session_id: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::Session::find_by_id(session_id)
            .one(self.db)
            .await?;

        Ok(entity.map(|session| session.user_id))
    }

    /// Finds a session by its id.
    ///
    /// # Arguments
    /// - `session_id` - Client-supplied session identifier
    ///
    /// # Returns
    /// - `Ok(Some(Session))` - Session found with full data
    /// - `Ok(None)` - No session with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>, DbErr> {
        let entity = entity::prelude::Session::find_by_id(session_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Session::from_entity))
    }
}
