//! Identity and session lifecycle service.
//!
//! This module provides the `IdentityService` implementing the state machine for
//! user registration and session start/end. Registration is idempotent, session
//! start guarantees the owning user row exists before the session row is
//! inserted, and session end folds the client-reported cumulative playtime into
//! the user's monotonic total.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{session::SessionRepository, user::UserRepository},
    error::AppError,
    model::{
        session::{EndSessionParam, StartSessionParam},
        user::RegisterUserParam,
    },
};

/// Username given to users created implicitly by a session start.
const IMPLICIT_USERNAME: &str = "Player";

/// Service providing registration and session lifecycle logic.
pub struct IdentityService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> IdentityService<'a> {
    /// Creates a new IdentityService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `IdentityService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user, or confirms an existing registration.
    ///
    /// Idempotent: registering an id twice is a no-op the second time and the
    /// existing username is preserved (first write wins).
    ///
    /// # Arguments
    /// - `param` - Registration parameters (user id and display name)
    ///
    /// # Returns
    /// - `Ok(())` - User registered or already present
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: RegisterUserParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .register_if_absent(&param.user_id, &param.username, Utc::now().timestamp_millis())
            .await?;

        Ok(())
    }

    /// Starts a new session for a user.
    ///
    /// Sequence: ensure the user exists (the session row's foreign key demands
    /// it) → merge any carried-over playtime a re-installing client reports →
    /// insert the session row. Each step commits independently; a failure
    /// partway leaves the earlier steps applied, which is safe because both are
    /// idempotent or monotonic.
    ///
    /// # Arguments
    /// - `param` - Session start parameters
    ///
    /// # Returns
    /// - `Ok(())` - Session created
    /// - `Err(AppError::DbErr)` - Duplicate session id or other database error
    pub async fn start_session(&self, param: StartSessionParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let session_repo = SessionRepository::new(self.db);
        let now = Utc::now().timestamp_millis();

        user_repo
            .register_if_absent(&param.user_id, IMPLICIT_USERNAME, now)
            .await?;

        if let Some(candidate) = param.starting_total_playtime {
            user_repo
                .sync_playtime_if_higher(&param.user_id, candidate)
                .await?;
        }

        session_repo
            .create(&param.session_id, &param.user_id, now, &param.os_info)
            .await?;

        Ok(())
    }

    /// Ends a session and reconciles the owner's playtime total.
    ///
    /// Closes the session with a server-assigned end time and the reported
    /// duration, then max-merges the reported cumulative playtime into the
    /// owning user's total. Ending an unknown or already-ended session is not a
    /// failure: the close affects nothing, the sync is skipped, and the outcome
    /// is logged informationally.
    ///
    /// # Arguments
    /// - `param` - Session end parameters
    ///
    /// # Returns
    /// - `Ok(())` - Session closed, or nothing to close
    /// - `Err(AppError::DbErr)` - Database error during update or lookup
    pub async fn end_session(&self, param: EndSessionParam) -> Result<(), AppError> {
        let session_repo = SessionRepository::new(self.db);

        let closed = session_repo
            .close(
                &param.session_id,
                Utc::now().timestamp_millis(),
                param.playtime_seconds,
            )
            .await?;

        if closed == 0 {
            tracing::info!(session_id = %param.session_id, "end for unknown session, nothing closed");
        }

        if let Some(candidate) = param.total_playtime_seconds {
            match session_repo.find_owner(&param.session_id).await? {
                Some(user_id) => {
                    let user_repo = UserRepository::new(self.db);
                    user_repo.sync_playtime_if_higher(&user_id, candidate).await?;
                }
                None => {
                    tracing::info!(session_id = %param.session_id, "session not found, skipping playtime sync");
                }
            }
        }

        Ok(())
    }
}
