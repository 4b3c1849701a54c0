use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterUserDto {
    pub user_id: Option<String>,
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserRegisteredDto {
    pub status: String,
    pub user_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct StartSessionDto {
    pub session_id: Option<String>,
    pub user_id: Option<String>,
    pub os_info: Option<String>,
    /// Playtime in seconds a re-installing client carried over from a cloud save.
    pub starting_total_playtime: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SessionStartedDto {
    pub status: String,
    pub session_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct EndSessionDto {
    pub session_id: Option<String>,
    #[serde(default)]
    pub playtime_seconds: i64,
    pub total_playtime_seconds: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SessionEndedDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RecordEventDto {
    pub session_id: Option<String>,
    pub event_type: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[schema(value_type = Object)]
    pub meta: Option<Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct EventRecordedDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub event_id: i32,
    pub session_id: String,
    pub event_type: String,
    pub x: f64,
    pub y: f64,
    /// Epoch milliseconds assigned by the server at ingestion.
    pub timestamp: i64,
    #[schema(value_type = Object)]
    pub meta: Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct EventListDto {
    pub events: Vec<EventDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UploadSaveDto {
    pub user_id: Option<String>,
    #[schema(value_type = Object)]
    pub save_data: Option<Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SaveUploadedDto {
    pub status: String,
    pub user_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub pool: bool,
}
