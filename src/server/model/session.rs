//! Session domain model and lifecycle parameters.

/// One continuous play period bounded by start and end submissions.
///
/// A session is `OPEN` until an end submission closes it; re-ending an already
/// closed session overwrites the end time and duration rather than erroring.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Client-supplied session identifier.
    pub session_id: String,
    /// Owning user.
    pub user_id: String,
    /// Epoch milliseconds, server-assigned at start.
    pub start_time: i64,
    /// Epoch milliseconds, server-assigned at end; `None` while open.
    pub end_time: Option<i64>,
    /// Client-reported play duration for this session.
    pub duration_seconds: i64,
    /// Operating system string reported by the client.
    pub os_info: String,
}

impl Session {
    /// Converts an entity model to a session domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Session` - The converted session domain model
    pub fn from_entity(entity: entity::session::Model) -> Self {
        Self {
            session_id: entity.session_id,
            user_id: entity.user_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            duration_seconds: entity.duration_seconds,
            os_info: entity.os_info,
        }
    }
}

/// Parameters for starting a session.
#[derive(Debug, Clone)]
pub struct StartSessionParam {
    /// Client-supplied session identifier
    pub session_id: String,
    /// Owning user; created implicitly if unseen.
    pub user_id: String,
    /// Operating system string; defaults applied at the controller boundary.
    pub os_info: String,
    /// Prior cloud-synced playtime a re-installing client carries over.
    pub starting_total_playtime: Option<i64>,
}

/// Parameters for ending a session.
#[derive(Debug, Clone)]
pub struct EndSessionParam {
    /// Client-supplied session identifier
    pub session_id: String,
    /// Client-reported duration of the ending session, in seconds.
    pub playtime_seconds: i64,
    /// Client-reported cumulative playtime to merge into the owner's total.
    pub total_playtime_seconds: Option<i64>,
}
