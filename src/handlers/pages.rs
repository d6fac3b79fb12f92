/// Page handlers - the shell page and the server-rendered detail page
use crate::error::Result;
use crate::render;
use crate::services::{CommentService, PostService};
use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

/// Serve the page shell with the empty `posts` container
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../html/index.html"))
}

/// Serve the post detail page, the target of "View Comments" links
pub async fn post_detail(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let posts = PostService::new((**pool).clone());
    let post = match posts.get_post(*post_id).await? {
        Some(post) => post,
        None => {
            return Ok(HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body("Page Not Found"));
        }
    };

    let comments = CommentService::new((**pool).clone())
        .get_post_comments(*post_id)
        .await?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render::post_detail_page(&post, &comments)))
}
