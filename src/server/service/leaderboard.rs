//! Read-only ranked queries over user aggregates.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{leaderboard::LeaderboardError, AppError},
    model::user::User,
};

/// The only leaderboard category currently served.
pub const PLAYTIME_CATEGORY: &str = "playtime";

/// Number of entries a leaderboard query returns.
const LEADERBOARD_LIMIT: u64 = 20;

/// Service providing leaderboard queries.
pub struct LeaderboardService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    /// Creates a new LeaderboardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LeaderboardService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the ranked users for a category.
    ///
    /// Only the playtime category exists; anything else is rejected before any
    /// datastore read. Ties keep storage order, which is stable but otherwise
    /// unspecified.
    ///
    /// # Arguments
    /// - `category` - Requested leaderboard category
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Top users by playtime, descending
    /// - `Err(AppError::LeaderboardErr)` - Unknown category
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn ranking(&self, category: &str) -> Result<Vec<User>, AppError> {
        if category != PLAYTIME_CATEGORY {
            return Err(LeaderboardError::UnknownCategory(category.to_string()).into());
        }

        let user_repo = UserRepository::new(self.db);
        let users = user_repo.top_by_playtime(LEADERBOARD_LIMIT).await?;

        Ok(users)
    }
}
