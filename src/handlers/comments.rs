/// Comment handlers - HTTP endpoints for comment operations
use crate::error::{AppError, Result};
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

/// Request body for creating a comment
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
    pub author: Option<String>,
}

/// Get comments for a post, newest first
pub async fn list_comments(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service.get_post_comments(*post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Create a new comment on a post
pub async fn create_comment(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<i64>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = CommentService::new((**pool).clone());
    let comment = service
        .create_comment(*post_id, req.author.as_deref(), &req.text)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Delete a comment from a post
pub async fn delete_comment(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    let service = CommentService::new((**pool).clone());
    let deleted = service.delete_comment(post_id, comment_id).await?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!(
            "comment {} does not exist on post {}",
            comment_id, post_id
        )))
    }
}
