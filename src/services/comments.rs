/// Comment service - handles comment creation, retrieval, and deletion
use crate::error::{AppError, Result};
use crate::models::Comment;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct CommentService {
    pool: SqlitePool,
}

impl CommentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get comments for a post, newest first
    ///
    /// An unknown post yields an empty list, not an error.
    pub async fn get_post_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, author, text, created_date
            FROM comments
            WHERE post_id = $1
            ORDER BY created_date DESC, id DESC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    /// Create a new comment on an existing post
    pub async fn create_comment(
        &self,
        post_id: i64,
        author: Option<&str>,
        text: &str,
    ) -> Result<Comment> {
        let exists = sqlx::query("SELECT 1 FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("post {} does not exist", post_id)));
        }

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, author, text, created_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, post_id, author, text, created_date
            "#,
        )
        .bind(post_id)
        .bind(author)
        .bind(text)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    /// Delete a comment belonging to a post
    pub async fn delete_comment(&self, post_id: i64, comment_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND post_id = $2")
            .bind(comment_id)
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
