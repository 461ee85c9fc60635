use axum::response::Html;

/// GET /session-test-page/ - serve the embedded test page.
///
/// The page must be served by this server rather than opened from disk:
/// browsers do not attach cookies to file:// origins, so the credentialed
/// fetches would silently run sessionless.
pub async fn handler() -> Html<&'static str> {
    Html(include_str!("../../static/session-test.html"))
}
