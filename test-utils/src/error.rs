use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to or prepare the in-memory SQLite database.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
