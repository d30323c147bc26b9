use axum::{http::StatusCode, response::Json};

use crate::models::PingResponse;

// GET /ping - Reachability check, never touches the database
pub async fn ping() -> (StatusCode, Json<PingResponse>) {
    let response = PingResponse {
        message: "pong".to_string(),
    };

    (StatusCode::OK, Json(response))
}
