/// Post list loader
///
/// The client side of the blog: fetches the posts collection endpoint and
/// fills the `posts` container of a page shell with one rendered fragment per
/// post, preserving response order. The whole fragment list is built first
/// and written in a single insertion.
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::render;

/// Collection endpoint the loader reads from
pub const POSTS_ENDPOINT: &str = "/api/posts/";

/// Element id of the container the fragments are appended to
pub const CONTAINER_ID: &str = "posts";

/// Errors produced by the loader. Callers that want the original silent
/// behavior log these and keep the page shell as-is.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("posts request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("container element #{0} not found in page")]
    MissingContainer(String),
}

/// Post id as the backend serializes it. The loader does not interpret ids;
/// they are substituted verbatim into the comments link.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PostId {
    Int(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Int(n) => write!(f, "{}", n),
            PostId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One record of the posts collection response.
///
/// `title` and `content` are not validated; absent fields render as empty
/// text. Extra fields in the payload are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub struct PostListLoader {
    http: reqwest::Client,
    base_url: String,
}

impl PostListLoader {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the posts collection and decode it
    pub async fn fetch_posts(&self) -> Result<Vec<PostRecord>, LoaderError> {
        let url = format!("{}{}", self.base_url, POSTS_ENDPOINT);
        let records = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<PostRecord>>()
            .await?;
        Ok(records)
    }

    /// Fetch the posts and return `page` with the rendered fragments written
    /// into its container element, in response order.
    ///
    /// The input page is never mutated; any failure leaves the caller with
    /// the shell exactly as it was. An empty collection writes nothing, so
    /// the container stays empty.
    pub async fn load_into(&self, page: &str) -> Result<String, LoaderError> {
        let records = self.fetch_posts().await?;
        if records.is_empty() {
            return Ok(page.to_string());
        }

        let fragments: String = records
            .iter()
            .map(|record| {
                render::post_fragment(&record.id.to_string(), &record.title, &record.content)
            })
            .collect();

        insert_into_container(page, CONTAINER_ID, &fragments)
            .ok_or_else(|| LoaderError::MissingContainer(CONTAINER_ID.to_string()))
    }
}

/// Write `markup` just inside the opening tag of the element with the given
/// id. Returns `None` when no such element is present.
fn insert_into_container(page: &str, container_id: &str, markup: &str) -> Option<String> {
    let marker = format!("id=\"{}\"", container_id);
    let attr_at = page.find(&marker)?;
    let tag_end = attr_at + page[attr_at..].find('>')?;

    let mut out = String::with_capacity(page.len() + markup.len());
    out.push_str(&page[..=tag_end]);
    out.push_str(markup);
    out.push_str(&page[tag_end + 1..]);
    Some(out)
}
