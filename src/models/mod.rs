/// Data models for the blog service
///
/// - `Post`: a blog entry with a title and body content
/// - `Comment`: a reader comment attached to a post
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A blog post row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub published_date: DateTime<Utc>,
}

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: Option<String>,
    pub text: String,
    pub created_date: DateTime<Utc>,
}
