use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LeaderboardEntryDto {
    pub user_id: String,
    pub username: String,
    pub total_playtime: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LeaderboardDto {
    pub category: String,
    pub leaderboard: Vec<LeaderboardEntryDto>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LeaderboardQueryDto {
    pub category: Option<String>,
}
