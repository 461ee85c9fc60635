use crate::config::ProbeConfig;
use crate::error::Result;
use crate::server;

/// Execute the `serve` command: start the HTTP server.
pub async fn execute(host: Option<&str>, port: Option<u16>, allow_origins: &[String]) -> Result<()> {
    let mut config = ProbeConfig::load()?;

    // Override config with CLI arguments
    if let Some(host) = host {
        config.host = host.to_string();
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
        .allowed_origins
        .extend(allow_origins.iter().cloned());

    println!("Session probe server starting...");
    println!(
        "Test page: http://{}:{}/session-test-page/",
        config.host, config.port
    );
    println!("Press Ctrl+C to stop");

    server::start(config).await
}
