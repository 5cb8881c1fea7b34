use axum::response::Html;

/// GET /
/// The upload form.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
