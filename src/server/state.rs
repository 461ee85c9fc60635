use std::sync::Arc;

use crate::config::ProbeConfig;
use crate::session::SessionStore;

/// Shared application state accessible to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub config: Arc<ProbeConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn SessionStore>, config: Arc<ProbeConfig>) -> Self {
        Self { store, config }
    }
}
