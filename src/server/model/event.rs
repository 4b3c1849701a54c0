//! Event domain model and recording parameters.

use serde_json::Value;

use crate::model::telemetry::EventDto;

/// A single timestamped, optionally-located telemetry record tied to a session.
///
/// Events are append-only; the timestamp comes from the server clock at
/// ingestion, never from the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Server-assigned identifier carrying insertion order.
    pub event_id: i32,
    /// Session the event belongs to.
    pub session_id: String,
    /// Advisory type tag; not a closed set.
    pub event_type: String,
    pub x: f64,
    pub y: f64,
    /// Epoch milliseconds, server-assigned at ingestion.
    pub timestamp: i64,
    /// Opaque structured payload, stored verbatim.
    pub meta: Value,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Event` - The converted event domain model
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            event_id: entity.event_id,
            session_id: entity.session_id,
            event_type: entity.event_type,
            x: entity.x_coord,
            y: entity.y_coord,
            timestamp: entity.timestamp,
            meta: entity.meta_data,
        }
    }

    /// Converts the event domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `EventDto` - The converted event DTO
    pub fn into_dto(self) -> EventDto {
        EventDto {
            event_id: self.event_id,
            session_id: self.session_id,
            event_type: self.event_type,
            x: self.x,
            y: self.y,
            timestamp: self.timestamp,
            meta: self.meta,
        }
    }
}

/// Parameters for recording a telemetry event.
#[derive(Debug, Clone)]
pub struct RecordEventParam {
    /// Session the event belongs to; must already exist.
    pub session_id: String,
    /// Advisory type tag supplied by the client.
    pub event_type: String,
    pub x: f64,
    pub y: f64,
    /// Opaque structured payload; defaults applied at the controller boundary.
    pub meta: Value,
}
