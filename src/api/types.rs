use serde::{Deserialize, Serialize};

/// Sentinel reported for session fields that were never set.
pub const NOT_SET: &str = "Not set";

/// Defaults applied by the set handler when a field is omitted.
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// GET /session-test/ response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub currency: String,
    pub language: String,
    pub timezone: String,
    /// The opaque session identifier, or null when no session exists.
    pub session_key: Option<String>,
}

/// POST /set-session/ request body. Every field is optional; omitted
/// fields fall back to the fixed defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetSessionRequest {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Success/error envelope returned by the mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub status: String,
    pub message: String,
}

impl StatusEnvelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
