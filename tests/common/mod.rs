use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Single-connection in-memory database with the schema applied.
///
/// One connection only: every handle to `:memory:` is its own database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    blog_service::db::ensure_schema(&pool)
        .await
        .expect("failed to apply schema");

    pool
}
