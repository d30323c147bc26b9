use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player row from the users table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub name: String,
}

/// One submitted score. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: i64,
    pub user_name: String,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /addscore. Both fields are optional here so that missing
/// values surface as our own 400s rather than extractor rejections.
/// `name` stays untyped: `0`, `false` and `""` all count as missing.
#[derive(Debug, Default, Deserialize)]
pub struct AddScoreRequest {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Query parameters for GET /getleaderboard
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddScoreResponse {
    pub status: u16,
    pub score: Score,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub status: u16,
    pub scores: Vec<Score>,
}

/// Envelope returned on every failure path
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
}
