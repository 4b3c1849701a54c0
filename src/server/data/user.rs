//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. It owns
//! the two SQL contracts the reconciliation model depends on: insert-or-ignore
//! registration and the monotonic-max playtime update.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::User;

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating and querying user records and folding playtime reports into the
/// stored aggregate.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user unless the id already exists.
    ///
    /// First write wins: when the id is already registered the insert is ignored,
    /// the existing username and aggregates stay untouched, and no error is
    /// returned. This is what makes registration and the implicit user creation
    /// on session start safely retryable.
    ///
    /// # Arguments
    /// - `user_id` - Client-supplied user identifier
    /// - `username` - Display name to use if the user is new
    /// - `created_at` - Registration timestamp in epoch milliseconds
    ///
    /// # Returns
    /// - `Ok(())` - User inserted, or already present
    /// - `Err(DbErr)` - Database error during insert
    pub async fn register_if_absent(
        &self,
        user_id: &str,
        username: &str,
        created_at: i64,
    ) -> Result<(), DbErr> {
        entity::prelude::User::insert(entity::user::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            username: ActiveValue::Set(username.to_string()),
            total_playtime: ActiveValue::Set(0),
            created_at: ActiveValue::Set(created_at),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Max-merges a reported playtime into the stored aggregate.
    ///
    /// Single guarded UPDATE: the row changes only when the candidate exceeds the
    /// stored value, so the operation is commutative and idempotent across the
    /// three reporting channels (session start carry-over, session end, save
    /// upload) and any interleaving converges to the maximum.
    ///
    /// # Arguments
    /// - `user_id` - User whose aggregate to update
    /// - `candidate_seconds` - Reported cumulative playtime in seconds
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the candidate was not higher
    ///   or the user is unknown)
    /// - `Err(DbErr)` - Database error during update
    pub async fn sync_playtime_if_higher(
        &self,
        user_id: &str,
        candidate_seconds: i64,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::TotalPlaytime,
                Expr::value(candidate_seconds),
            )
            .filter(entity::user::Column::UserId.eq(user_id))
            .filter(entity::user::Column::TotalPlaytime.lt(candidate_seconds))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Finds a user by their id.
    ///
    /// # Arguments
    /// - `user_id` - Client-supplied user identifier
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Returns the top users ranked by accumulated playtime, descending.
    ///
    /// Ties keep the underlying storage order; no secondary sort key is applied.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of users to return
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Ranked users, highest playtime first
    /// - `Err(DbErr)` - Database error during query
    pub async fn top_by_playtime(&self, limit: u64) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::TotalPlaytime)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
