use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::state::AppState;
use crate::api;
use crate::config::ProbeConfig;

/// Build the complete axum Router with all routes and middleware.
pub fn build(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .merge(api::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Credentialed CORS. Cookies only flow cross-origin when the response
/// names a concrete origin, so this never uses a wildcard: either the
/// configured origin list, or (debug mode, no list) the request origin
/// mirrored back.
fn cors_layer(config: &ProbeConfig) -> CorsLayer {
    let origin = if config.allowed_origins.is_empty() && config.debug {
        AllowOrigin::mirror_request()
    } else {
        let mut origins: Vec<HeaderValue> = Vec::new();
        for raw in &config.allowed_origins {
            match raw.parse::<HeaderValue>() {
                Ok(value) => origins.push(value),
                Err(_) => tracing::warn!(origin = %raw, "Ignoring unparseable allowed origin"),
            }
        }
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
