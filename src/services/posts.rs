/// Post service - handles post creation, retrieval, and management
use crate::error::Result;
use crate::models::Post;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct PostService {
    pool: SqlitePool,
}

impl PostService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all posts, newest first
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, author, published_date
            FROM posts
            ORDER BY published_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a post by ID
    pub async fn get_post(&self, post_id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, author, published_date
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Create a new post
    pub async fn create_post(
        &self,
        title: &str,
        content: &str,
        author: Option<&str>,
    ) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, author, published_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, author, published_date
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(author)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Update a post's title and content
    pub async fn update_post(
        &self,
        post_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, content = $2
            WHERE id = $3
            RETURNING id, title, content, author, published_date
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Delete a post and its comments
    pub async fn delete_post(&self, post_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every post (and every comment with them), returning the count
    /// of deleted posts
    pub async fn delete_all_posts(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comments").execute(&mut *tx).await?;

        let result = sqlx::query("DELETE FROM posts").execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
