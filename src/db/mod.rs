/// Database access layer
///
/// Provides pool creation and schema bootstrap. The blog runs on SQLite;
/// schema statements are idempotent so startup can run them unconditionally.
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::Result;

/// Create a SQLite connection pool
pub async fn create_pool(url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await?;
    Ok(pool)
}

/// Ensure the posts and comments tables exist
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            title           TEXT NOT NULL,
            content         TEXT NOT NULL,
            author          TEXT,
            published_date  TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            post_id       INTEGER NOT NULL REFERENCES posts(id),
            author        TEXT,
            text          TEXT NOT NULL,
            created_date  TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_comments_post_id ON comments(post_id)")
        .execute(pool)
        .await?;

    Ok(())
}
