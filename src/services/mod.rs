/// Business logic layer for the blog service
///
/// - Post service: post creation, retrieval, updates, deletion
/// - Comment service: per-post comment management
pub mod comments;
pub mod posts;

pub use comments::CommentService;
pub use posts::PostService;
