pub mod page;
pub mod session;
pub mod types;

use axum::routing::{any, get, post};
use axum::Router;

use crate::server::state::AppState;

/// Build the session test routes.
///
/// /set-session/ accepts POST only but answers other methods with its
/// in-band error envelope; /clear-session/ flushes on any method.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/session-test-page/", get(page::handler))
        .route("/session-test/", get(session::read_handler))
        .route(
            "/set-session/",
            post(session::set_handler).fallback(session::set_wrong_method_handler),
        )
        .route("/clear-session/", any(session::clear_handler))
}
