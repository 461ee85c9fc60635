pub mod config;
pub mod serve;

use clap::{Parser, Subcommand};

/// Session Probe - session storage and cross-origin cookie test server
#[derive(Debug, Parser)]
#[command(name = "session-probe", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host address to bind to (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config file)
        #[arg(long)]
        port: Option<u16>,

        /// Additional origin allowed to make credentialed requests (repeatable)
        #[arg(long = "allow-origin", value_name = "ORIGIN")]
        allow_origins: Vec<String>,
    },

    /// Print the resolved configuration as TOML
    Config,
}
