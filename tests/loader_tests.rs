use blog_service::loader::{LoaderError, PostListLoader};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SHELL: &str = "<html><body><h1>Blog Posts</h1><div id=\"posts\"></div></body></html>";

async fn mock_posts(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/posts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn one_fragment_per_record_in_response_order() {
    let server = MockServer::start().await;
    mock_posts(
        &server,
        json!([
            {"id": 1, "title": "First", "content": "a"},
            {"id": 2, "title": "Second", "content": "b"},
            {"id": 3, "title": "Third", "content": "c"},
        ]),
    )
    .await;

    let loader = PostListLoader::new(server.uri());
    let page = loader.load_into(SHELL).await.unwrap();

    assert_eq!(page.matches("<h3>").count(), 3);
    assert_eq!(page.matches("<hr/>").count(), 3);

    let first = page.find("<h3>First</h3>").unwrap();
    let second = page.find("<h3>Second</h3>").unwrap();
    let third = page.find("<h3>Third</h3>").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn hello_world_scenario() {
    let server = MockServer::start().await;
    mock_posts(
        &server,
        json!([{"id": 1, "title": "Hello", "content": "World"}]),
    )
    .await;

    let loader = PostListLoader::new(server.uri());
    let page = loader.load_into(SHELL).await.unwrap();

    assert!(page.contains("<h3>Hello</h3>"));
    assert!(page.contains("<p>World</p>"));
    assert!(page.contains("<a href=\"/posts/1/\">View Comments</a>"));
}

#[tokio::test]
async fn empty_collection_leaves_container_empty() {
    let server = MockServer::start().await;
    mock_posts(&server, json!([])).await;

    let loader = PostListLoader::new(server.uri());
    let page = loader.load_into(SHELL).await.unwrap();
    assert_eq!(page, SHELL);
}

#[tokio::test]
async fn records_missing_fields_still_render() {
    let server = MockServer::start().await;
    mock_posts(&server, json!([{"id": "a"}, {"id": "b"}])).await;

    let loader = PostListLoader::new(server.uri());
    let page = loader.load_into(SHELL).await.unwrap();

    assert_eq!(page.matches("<h3></h3>").count(), 2);
    assert_eq!(page.matches("<p></p>").count(), 2);
    assert!(page.contains("<a href=\"/posts/a/\">View Comments</a>"));
    assert!(page.contains("<a href=\"/posts/b/\">View Comments</a>"));
}

#[tokio::test]
async fn link_targets_substitute_ids_verbatim() {
    let server = MockServer::start().await;
    mock_posts(
        &server,
        json!([
            {"id": 42, "title": "Num", "content": "n"},
            {"id": "slug", "title": "Text", "content": "t"},
        ]),
    )
    .await;

    let loader = PostListLoader::new(server.uri());
    let page = loader.load_into(SHELL).await.unwrap();

    assert!(page.contains("href=\"/posts/42/\""));
    assert!(page.contains("href=\"/posts/slug/\""));
}

#[tokio::test]
async fn title_and_content_render_as_literal_text() {
    let server = MockServer::start().await;
    mock_posts(
        &server,
        json!([{"id": 1, "title": "<b>bold</b>", "content": "2 > 1 & 1 < 2"}]),
    )
    .await;

    let loader = PostListLoader::new(server.uri());
    let page = loader.load_into(SHELL).await.unwrap();

    assert!(!page.contains("<b>bold</b>"));
    assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(page.contains("2 &gt; 1 &amp; 1 &lt; 2"));
}

#[tokio::test]
async fn extra_record_fields_are_ignored() {
    let server = MockServer::start().await;
    mock_posts(
        &server,
        json!([{
            "id": 7,
            "title": "Full",
            "content": "serialization",
            "author": "writer",
            "published_date": "2024-01-01T00:00:00Z",
        }]),
    )
    .await;

    let loader = PostListLoader::new(server.uri());
    let page = loader.load_into(SHELL).await.unwrap();
    assert!(page.contains("<h3>Full</h3>"));
}

#[tokio::test]
async fn server_error_leaves_page_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let loader = PostListLoader::new(server.uri());
    let result = loader.load_into(SHELL).await;
    assert!(matches!(result, Err(LoaderError::Http(_))));
}

#[tokio::test]
async fn invalid_json_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let loader = PostListLoader::new(server.uri());
    assert!(loader.load_into(SHELL).await.is_err());
}

#[tokio::test]
async fn unreachable_backend_is_an_error() {
    // Reserved port with nothing listening
    let loader = PostListLoader::new("http://127.0.0.1:1");
    let result = loader.load_into(SHELL).await;
    assert!(matches!(result, Err(LoaderError::Http(_))));
}

#[tokio::test]
async fn missing_container_is_an_error() {
    let server = MockServer::start().await;
    mock_posts(&server, json!([{"id": 1, "title": "t", "content": "c"}])).await;

    let loader = PostListLoader::new(server.uri());
    let result = loader.load_into("<html><body></body></html>").await;
    assert!(matches!(result, Err(LoaderError::MissingContainer(_))));
}
