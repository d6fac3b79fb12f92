/// HTTP handlers for the blog service
///
/// - Posts: list, create, retrieve, update, delete, delete-all
/// - Comments: list, create, delete under each post
/// - Pages: the page shell and the server-rendered post detail page
use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::SqlitePool;

pub mod comments;
pub mod pages;
pub mod posts;

pub use comments::{create_comment, delete_comment, list_comments};
pub use pages::{index, post_detail};
pub use posts::{create_post, delete_all_posts, delete_post, get_post, list_posts, update_post};

/// Health check endpoint with a database probe
pub async fn health(pool: web::Data<SqlitePool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339(),
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("database probe failed: {}", e),
            "service": "blog-service",
        })),
    }
}

/// Register every route of the service. Shared between `main` and the
/// integration tests so both run the same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/posts/{post_id}", web::get().to(post_detail))
        .route("/api/health", web::get().to(health))
        .service(
            web::scope("/api/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(list_posts))
                        .route(web::post().to(create_post)),
                )
                // Literal route first so it never parses as a post id
                .service(web::resource("/delete").route(web::delete().to(delete_all_posts)))
                .service(
                    web::resource("/{post_id}")
                        .route(web::get().to(get_post))
                        .route(web::put().to(update_post))
                        .route(web::delete().to(delete_post)),
                )
                .service(
                    web::resource("/{post_id}/comments")
                        .route(web::get().to(list_comments))
                        .route(web::post().to(create_comment)),
                )
                .service(
                    web::resource("/{post_id}/comments/{comment_id}")
                        .route(web::delete().to(delete_comment)),
                ),
        );
}
