/// Blog Service Library
///
/// A small blog backend with the client that consumes it:
///
/// - `handlers`: HTTP request handlers for the posts/comments API and pages
/// - `models`: Data structures for posts and comments
/// - `services`: Business logic layer
/// - `db`: Database pool and schema bootstrap
/// - `render`: HTML fragment and page rendering
/// - `loader`: Post list loader client (fetches the posts API and fills the
///   page shell)
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod render;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
