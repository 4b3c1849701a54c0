//! Telemetry event recording service.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{Event, RecordEventParam},
};

/// Event tags the pipeline knows about.
///
/// The tag is advisory: clients may ship new tags without a server deploy, so
/// an unrecognized value is recorded with a warning rather than rejected.
pub const KNOWN_EVENT_TYPES: [&str; 7] = [
    "STEALTH_BROKEN",
    "PLAYER_DEATH",
    "ITEM_USED",
    "LEVEL_COMPLETE",
    "ENEMY_ALERT",
    "CHECKPOINT",
    "DAMAGE_TAKEN",
];

/// Service providing event ingestion and the recent-events view.
pub struct EventService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one telemetry event with a server-assigned timestamp.
    ///
    /// The timestamp always comes from the server clock, so event ordering is
    /// consistent even when client clocks disagree. Retried submissions insert
    /// duplicate rows; deduplication is left to downstream consumers.
    ///
    /// # Arguments
    /// - `param` - Event parameters from the client
    ///
    /// # Returns
    /// - `Ok(Event)` - The stored event with its assigned id
    /// - `Err(AppError::DbErr)` - Unknown session or other database error
    pub async fn record(&self, param: RecordEventParam) -> Result<Event, AppError> {
        if !KNOWN_EVENT_TYPES.contains(&param.event_type.as_str()) {
            tracing::warn!(event_type = %param.event_type, "unknown event type, recording anyway");
        }

        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .insert(
                &param.session_id,
                &param.event_type,
                param.x,
                param.y,
                Utc::now().timestamp_millis(),
                param.meta,
            )
            .await?;

        Ok(event)
    }

    /// Returns the most recently ingested events, newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of events to return
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Events in reverse insertion order
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn recent(&self, limit: u64) -> Result<Vec<Event>, AppError> {
        let event_repo = EventRepository::new(self.db);
        let events = event_repo.recent(limit).await?;
        Ok(events)
    }
}
