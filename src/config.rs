use serde::{Deserialize, Serialize};

use crate::dirs;
use crate::error::Result;

/// User-configurable settings for the probe server and CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Host address for the HTTP server (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the HTTP server (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Development mode: when no origins are configured, mirror the
    /// request origin in CORS responses instead of rejecting it
    #[serde(default)]
    pub debug: bool,

    /// Origins allowed to make credentialed cross-origin requests
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Session cookie attributes
    #[serde(default)]
    pub cookie: CookieConfig,
}

/// Attributes stamped onto the session identifier cookie.
///
/// Cross-origin credentialed requests only carry the cookie when it was
/// issued with `SameSite=None; Secure`, which is why both are explicit
/// configuration rather than serving-library defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Cookie name (default: sessionid)
    #[serde(default = "default_cookie_name")]
    pub name: String,

    /// SameSite attribute (default: none)
    #[serde(default = "default_same_site")]
    pub same_site: SameSitePolicy,

    /// Secure attribute (default: true)
    #[serde(default = "default_true")]
    pub secure: bool,

    /// HttpOnly attribute (default: true)
    #[serde(default = "default_true")]
    pub http_only: bool,

    /// Cookie Max-Age in seconds (default: two weeks)
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
}

/// SameSite cookie attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSitePolicy {
    None,
    Lax,
    Strict,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cookie_name() -> String {
    "sessionid".to_string()
}

fn default_same_site() -> SameSitePolicy {
    SameSitePolicy::None
}

fn default_true() -> bool {
    true
}

fn default_max_age_secs() -> u64 {
    1_209_600
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            allowed_origins: Vec::new(),
            cookie: CookieConfig::default(),
        }
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            same_site: default_same_site(),
            secure: default_true(),
            http_only: default_true(),
            max_age_secs: default_max_age_secs(),
        }
    }
}

impl ProbeConfig {
    /// Load configuration from the default config file path.
    /// Returns default config if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&dirs::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| {
                crate::error::ProbeError::Config(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let config: ProbeConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the current configuration to the default config file path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&dirs::config_path())
    }

    /// Save the current configuration to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the server bind address string (e.g., "127.0.0.1:8000").
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProbeConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert!(!config.debug);
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.cookie.name, "sessionid");
        assert_eq!(config.cookie.same_site, SameSitePolicy::None);
        assert!(config.cookie.secure);
        assert!(config.cookie.http_only);
        assert_eq!(config.cookie.max_age_secs, 1_209_600);
    }

    #[test]
    fn test_bind_address() {
        let config = ProbeConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_config_deserialize() {
        let toml_str = r#"
            host = "0.0.0.0"
            port = 8080
            debug = true
            allowed_origins = ["https://shop.example.com"]

            [cookie]
            name = "probe_session"
            same_site = "lax"
            secure = false
        "#;
        let config: ProbeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.debug);
        assert_eq!(config.allowed_origins, vec!["https://shop.example.com"]);
        assert_eq!(config.cookie.name, "probe_session");
        assert_eq!(config.cookie.same_site, SameSitePolicy::Lax);
        assert!(!config.cookie.secure);
        // Fields absent from the [cookie] table keep their defaults
        assert!(config.cookie.http_only);
        assert_eq!(config.cookie.max_age_secs, 1_209_600);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ProbeConfig = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.cookie.same_site, SameSitePolicy::None);
    }

    #[test]
    fn test_same_site_serde_rendering() {
        let config = ProbeConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        assert!(serialized.contains("same_site = \"none\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = ProbeConfig {
            host: "0.0.0.0".to_string(),
            port: 9999,
            debug: true,
            allowed_origins: vec!["https://app.example.com".to_string()],
            cookie: CookieConfig {
                name: "sid".to_string(),
                same_site: SameSitePolicy::Strict,
                secure: false,
                http_only: false,
                max_age_secs: 3600,
            },
        };
        config.save_to(&path).unwrap();

        let loaded = ProbeConfig::load_from(&path).unwrap();
        assert_eq!(loaded.host, "0.0.0.0");
        assert_eq!(loaded.port, 9999);
        assert_eq!(loaded.allowed_origins, vec!["https://app.example.com"]);
        assert_eq!(loaded.cookie.name, "sid");
        assert_eq!(loaded.cookie.same_site, SameSitePolicy::Strict);
        assert_eq!(loaded.cookie.max_age_secs, 3600);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ProbeConfig::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(loaded.port, 8000);
    }
}
