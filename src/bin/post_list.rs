/// Standalone post list client.
///
/// Fetches the posts collection from the configured backend, fills the page
/// shell's `posts` container, and emits the result on stdout. Failures leave
/// the shell untouched and are only visible in debug logs.
use blog_service::loader::PostListLoader;
use blog_service::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PAGE_SHELL: &str = include_str!("../html/index.html");

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            std::process::exit(1);
        }
    };

    let loader = PostListLoader::new(config.client.base_url.clone());

    match loader.load_into(PAGE_SHELL).await {
        Ok(page) => print!("{}", page),
        Err(e) => {
            tracing::debug!("post list load failed: {}", e);
            print!("{}", PAGE_SHELL);
        }
    }
}
