pub mod api;
pub mod leaderboard;
pub mod telemetry;
