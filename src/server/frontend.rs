//! Embedded single-page frontend.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serves the frontend for every path the API does not handle.
pub async fn frontend_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
