use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde_json::Value;
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::{AddScoreRequest, AddScoreResponse};

/// POST /addscore - Record a score, creating the user on first sight
///
/// Body: `{"name": "alice", "score": 42}`
pub async fn add_score(
    State(pool): State<SqlitePool>,
    payload: Result<Json<AddScoreRequest>, JsonRejection>,
) -> Result<Json<AddScoreResponse>, ApiError> {
    let Json(request) = payload?;

    let name = require_name(request.name)?;

    let score = request
        .score
        .ok_or_else(|| ApiError::BadRequest("Score is required".to_string()))?;

    let record = db::submit_score(&pool, &name, score).await?;

    Ok(Json(AddScoreResponse {
        status: 200,
        score: record,
    }))
}

fn require_name(name: Option<Value>) -> Result<String, ApiError> {
    match name {
        Some(Value::String(name)) if !name.is_empty() => Ok(name),
        None | Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) => {
            Err(ApiError::BadRequest("Name is required".to_string()))
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            Err(ApiError::BadRequest("Name is required".to_string()))
        }
        Some(_) => Err(ApiError::BadRequest("Name must be a string".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejection(name: Option<Value>) -> String {
        match require_name(name) {
            Err(ApiError::BadRequest(message)) => message,
            other => panic!("expected a bad request, got {:?}", other),
        }
    }

    #[test]
    fn accepts_non_empty_strings() {
        assert_eq!(require_name(Some(json!("alice"))).unwrap(), "alice");
        assert_eq!(require_name(Some(json!(" "))).unwrap(), " ");
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for name in [None, Some(json!(null)), Some(json!(false)), Some(json!("")), Some(json!(0)), Some(json!(0.0))] {
            assert_eq!(rejection(name), "Name is required");
        }
    }

    #[test]
    fn other_values_must_be_strings() {
        for name in [json!(7), json!(true), json!(["alice"]), json!({ "first": "alice" })] {
            assert_eq!(rejection(Some(name)), "Name must be a string");
        }
    }
}
