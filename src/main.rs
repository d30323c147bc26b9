use leaderboard_api::{create_app, db, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting leaderboard api...");

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    tracing::info!("Database connection established.");

    let addr = config.socket_addr();
    let app = create_app(pool, &config.route_prefix);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}{}", addr, config.route_prefix);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
