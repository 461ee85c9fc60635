#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Invalid request body: {0}")]
    BadBody(String),

    #[error("Only POST requests allowed")]
    MethodNotAllowed,

    #[error("Session store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

impl axum::response::IntoResponse for ProbeError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;
        use axum::Json;

        // Request-shape problems on the test endpoints are reported in-band:
        // HTTP 200 with a {status, message} envelope. The integration tests
        // pin this contract down.
        match &self {
            ProbeError::BadBody(_) | ProbeError::MethodNotAllowed => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "error",
                    "message": self.to_string(),
                })),
            )
                .into_response(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_allowed_message() {
        let err = ProbeError::MethodNotAllowed;
        assert_eq!(err.to_string(), "Only POST requests allowed");
    }

    #[test]
    fn test_bad_body_preserves_parse_detail() {
        let err = ProbeError::BadBody("expected value at line 1 column 1".to_string());
        assert!(err.to_string().contains("expected value"));
    }
}
