use axum::{
    routing::{get, post},
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;

/// Build the application router. Every endpoint is mounted under
/// `route_prefix` (empty for root).
pub fn create_app(pool: SqlitePool, route_prefix: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/ping", get(routes::health::ping))
        .route("/addscore", post(routes::scores::add_score))
        .route("/getleaderboard", get(routes::leaderboard::get_leaderboard));

    let router = if route_prefix.is_empty() {
        api
    } else {
        Router::new().nest(route_prefix, api)
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(pool)
}
