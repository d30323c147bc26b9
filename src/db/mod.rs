use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use tracing::{debug, info};

use crate::models::*;

const SCHEMA: [&str; 3] = [
    r#"CREATE TABLE IF NOT EXISTS users (
           name TEXT PRIMARY KEY NOT NULL
       )"#,
    r#"CREATE TABLE IF NOT EXISTS scores (
           id INTEGER PRIMARY KEY AUTOINCREMENT,
           user_name TEXT NOT NULL REFERENCES users(name),
           user_name_folded TEXT NOT NULL,
           score REAL NOT NULL,
           created_at TEXT NOT NULL
       )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_scores_user_name ON scores (user_name)"#,
];

/// Open a pool for `database_url`, creating the SQLite file if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new().connect_with(options).await
}

/// Create the tables if they don't exist yet. Safe to run on every start.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

// User queries
/// Insert the user unless it already exists. Idempotent.
pub async fn ensure_user(tx: &mut Transaction<'_, Sqlite>, name: &str) -> Result<(), sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO users (name) VALUES (?) ON CONFLICT (name) DO NOTHING"#
    )
    .bind(name)
    .execute(&mut **tx)
    .await?;

    if result.rows_affected() > 0 {
        debug!("Created user {}", name);
    }
    Ok(())
}

// Score queries
pub async fn insert_score(
    tx: &mut Transaction<'_, Sqlite>,
    user_name: &str,
    score: f64,
) -> Result<Score, sqlx::Error> {
    sqlx::query_as::<_, Score>(
        r#"INSERT INTO scores (user_name, user_name_folded, score, created_at)
           VALUES (?, ?, ?, ?)
           RETURNING id, user_name, score, created_at"#
    )
    .bind(user_name)
    .bind(fold_case(user_name))
    .bind(score)
    .bind(chrono::Utc::now())
    .fetch_one(&mut **tx)
    .await
}

/// Record a score for `user_name`, creating the user on first submission.
/// Both writes share one transaction, so a failed score insert never leaves
/// an orphan user behind.
#[tracing::instrument(skip(pool))]
pub async fn submit_score(pool: &SqlitePool, user_name: &str, score: f64) -> Result<Score, sqlx::Error> {
    let mut tx = pool.begin().await?;

    ensure_user(&mut tx, user_name).await?;
    let record = insert_score(&mut tx, user_name, score).await?;

    tx.commit().await?;

    info!("Recorded score {} for {}", record.id, user_name);
    Ok(record)
}

/// All scores whose user name contains `search`, ignoring case.
/// An empty search matches everything. Both sides are lowercased in Rust
/// because SQLite only folds ASCII in `LIKE`.
pub async fn search_scores(pool: &SqlitePool, search: &str) -> Result<Vec<Score>, sqlx::Error> {
    sqlx::query_as::<_, Score>(
        r#"SELECT id, user_name, score, created_at
           FROM scores
           WHERE user_name_folded LIKE '%' || ? || '%' ESCAPE '\'
           ORDER BY id"#
    )
    .bind(escape_like(&fold_case(search)))
    .fetch_all(pool)
    .await
}

fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Escape LIKE wildcards so the search text matches literally.
fn escape_like(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
