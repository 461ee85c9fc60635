use clap::Parser;
use tracing_subscriber::EnvFilter;

use session_probe::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Ensure the config directory exists
    session_probe::dirs::ensure_dirs()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            allow_origins,
        } => {
            session_probe::cli::serve::execute(host.as_deref(), port, &allow_origins).await?;
        }
        Commands::Config => {
            session_probe::cli::config::execute()?;
        }
    }

    Ok(())
}
