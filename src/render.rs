/// HTML rendering for post fragments and server-rendered pages
///
/// Titles, bodies, and author names are always emitted as escaped literal
/// text. Templates live under `src/html/` and are embedded at compile time.
use crate::models::{Comment, Post};

/// Render one post fragment: heading, body, comments link, separator.
///
/// `id` is substituted verbatim into the link target `/posts/{id}/`.
pub fn post_fragment(id: &str, title: &str, content: &str) -> String {
    format!(
        "<h3>{}</h3>\n<p>{}</p>\n<a href=\"/posts/{}/\">View Comments</a>\n<hr/>\n",
        html_escape::encode_text(title),
        html_escape::encode_text(content),
        html_escape::encode_double_quoted_attribute(id),
    )
}

/// Render one comment line for the detail page
pub fn comment_fragment(comment: &Comment) -> String {
    let author = comment.author.as_deref().unwrap_or("anonymous");
    format!(
        "<li><strong>{}</strong>: {}</li>\n",
        html_escape::encode_text(author),
        html_escape::encode_text(&comment.text),
    )
}

/// Render the post detail page with its comment list
pub fn post_detail_page(post: &Post, comments: &[Comment]) -> String {
    let comments_html = comments.iter().map(comment_fragment).collect::<String>();
    let author = post.author.as_deref().unwrap_or("anonymous");

    include_str!("html/post.html")
        .replace("<!--title-->", &html_escape::encode_text(&post.title))
        .replace("<!--content-->", &html_escape::encode_text(&post.content))
        .replace("<!--author-->", &html_escape::encode_text(author))
        .replace("<!--comments-->", &comments_html)
}
