//! Event data repository for database operations.
//!
//! Events are append-only: this module only ever inserts rows and reads them
//! back newest-first for the recent-events view.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};
use serde_json::Value;

use crate::server::model::event::Event;

/// Repository providing database operations for telemetry events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one event row.
    ///
    /// The referenced session must exist; the foreign key rejects events for
    /// unknown sessions at the datastore. Duplicate submissions (client retry)
    /// produce duplicate rows since there is no uniqueness constraint.
    ///
    /// # Arguments
    /// - `session_id` - Session the event belongs to
    /// - `event_type` - Advisory type tag
    /// - `x` / `y` - World coordinates of the event
    /// - `timestamp` - Server-assigned ingestion timestamp in epoch milliseconds
    /// - `meta` - Opaque structured payload, stored verbatim
    ///
    /// # Returns
    /// - `Ok(Event)` - The stored event with its assigned id
    /// - `Err(DbErr)` - Unknown session or other database error
    pub async fn insert(
        &self,
        session_id: &str,
        event_type: &str,
        x: f64,
        y: f64,
        timestamp: i64,
        meta: Value,
    ) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            session_id: ActiveValue::Set(session_id.to_string()),
            event_type: ActiveValue::Set(event_type.to_string()),
            x_coord: ActiveValue::Set(x),
            y_coord: ActiveValue::Set(y),
            timestamp: ActiveValue::Set(timestamp),
            meta_data: ActiveValue::Set(meta),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    /// Returns the most recently ingested events, newest first.
    ///
    /// Ordered by `event_id`, which carries server insertion order exactly;
    /// the stored timestamp has millisecond resolution and is not reliable
    /// for ordering same-tick inserts.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of events to return
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Events in reverse insertion order
    /// - `Err(DbErr)` - Database error during query
    pub async fn recent(&self, limit: u64) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::EventId)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }
}
