pub mod router;
pub mod state;

use std::sync::Arc;

use crate::config::{ProbeConfig, SameSitePolicy};
use crate::error::{ProbeError, Result};
use crate::session::MemoryStore;

/// Start the HTTP server with the given configuration.
pub async fn start(config: ProbeConfig) -> Result<()> {
    if config.cookie.same_site == SameSitePolicy::None && !config.cookie.secure {
        tracing::warn!(
            cookie = %config.cookie.name,
            "SameSite=None without Secure; browsers will reject the session cookie"
        );
    }

    let store = Arc::new(MemoryStore::new());
    tracing::info!(
        cookie = %config.cookie.name,
        same_site = ?config.cookie.same_site,
        secure = config.cookie.secure,
        "Session cookie contract"
    );

    let bind_addr = config.bind_address();
    let app_state = state::AppState::new(store, Arc::new(config));

    let app = router::build(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ProbeError::Server(format!("Failed to bind to {bind_addr}: {e}")))?;

    tracing::info!("Server listening on {bind_addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| ProbeError::Server(format!("Server error: {e}")))?;

    Ok(())
}
