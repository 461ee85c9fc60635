use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::api::types::{
    SessionView, SetSessionRequest, StatusEnvelope, DEFAULT_CURRENCY, DEFAULT_LANGUAGE,
    DEFAULT_TIMEZONE, NOT_SET,
};
use crate::error::ProbeError;
use crate::server::state::AppState;
use crate::session::{cookie, Session};

/// GET /session-test/ - report current session contents.
///
/// Never creates a session: a request without a live session gets the
/// "Not set" sentinels and a null key.
pub async fn read_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<SessionView>, ProbeError> {
    let key = cookie::session_key(&jar, &state.config.cookie);
    let session = Session::load(state.store.as_ref(), key).await?;

    let field = |name: &str| session.get(name).unwrap_or(NOT_SET).to_string();
    Ok(Json(SessionView {
        currency: field("currency"),
        language: field("language"),
        timezone: field("timezone"),
        session_key: session.key().map(|k| k.to_string()),
    }))
}

/// POST /set-session/ - assign the session fields.
///
/// The body is parsed by hand rather than through the `Json` extractor:
/// malformed input must surface as an HTTP 200 error envelope, not an
/// extractor-generated 4xx.
pub async fn set_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Response, ProbeError> {
    let request: SetSessionRequest =
        serde_json::from_slice(&body).map_err(|e| ProbeError::BadBody(e.to_string()))?;

    let key = cookie::session_key(&jar, &state.config.cookie);
    let mut session = Session::load(state.store.as_ref(), key).await?;

    session.insert(
        "currency",
        request.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
    );
    session.insert(
        "language",
        request.language.as_deref().unwrap_or(DEFAULT_LANGUAGE),
    );
    session.insert(
        "timezone",
        request.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE),
    );
    session.save(state.store.as_ref()).await?;

    let key = session
        .key()
        .cloned()
        .ok_or_else(|| ProbeError::Server("session key missing after save".to_string()))?;
    tracing::debug!(session = %key, "Session data set");

    let jar = cookie::issue(jar, &key, &state.config.cookie);
    Ok((jar, Json(StatusEnvelope::success("Session data set"))).into_response())
}

/// Any non-POST method on /set-session/ - reported in-band per the
/// endpoint's envelope contract.
pub async fn set_wrong_method_handler() -> ProbeError {
    ProbeError::MethodNotAllowed
}

/// /clear-session/ (any method) - destroy the session unconditionally.
///
/// Idempotent: clearing an absent session returns the same envelope.
pub async fn clear_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, ProbeError> {
    let key = cookie::session_key(&jar, &state.config.cookie);
    let session = Session::load(state.store.as_ref(), key).await?;

    if let Some(key) = session.key() {
        tracing::debug!(session = %key, "Flushing session");
    }
    session.flush(state.store.as_ref()).await?;

    let jar = cookie::strip(jar, &state.config.cookie);
    Ok((jar, Json(StatusEnvelope::success("Session cleared"))).into_response())
}
