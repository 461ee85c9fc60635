use std::path::PathBuf;

/// Returns the base directory for session-probe data.
///
/// Uses `$SESSION_PROBE_HOME` if set, otherwise defaults to `~/.session-probe`.
pub fn probe_home() -> PathBuf {
    if let Ok(home) = std::env::var("SESSION_PROBE_HOME") {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".session-probe")
}

/// Returns the path to the user configuration file.
pub fn config_path() -> PathBuf {
    probe_home().join("config.toml")
}

/// Ensure all required directories exist.
pub fn ensure_dirs() -> std::io::Result<()> {
    std::fs::create_dir_all(probe_home())
}
