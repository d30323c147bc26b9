use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::{LeaderboardQuery, LeaderboardResponse};

/// GET /getleaderboard?search=ali - Scores whose user name contains `search`
///
/// Matching ignores case. Without `search` every score is returned.
#[tracing::instrument(skip(pool))]
pub async fn get_leaderboard(
    State(pool): State<SqlitePool>,
    params: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let Query(params) = params?;
    let search = params.search.unwrap_or_default();

    let scores = db::search_scores(&pool, &search).await?;

    Ok(Json(LeaderboardResponse {
        status: 200,
        scores,
    }))
}
