mod config;
mod directory;
mod models;
mod seed;
mod web;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use directory::Directory;

/// Mergington High School activities API — list activities, sign students up and unregister them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server
    ///
    /// Examples:
    ///   serve                      — listen on the configured host/port (default 0.0.0.0:8000)
    ///   serve -a 127.0.0.1:9000    — override the listen address
    Serve {
        /// Path to config file (defaults to ./config.toml when present)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Listen address, overrides [server] host/port from config
        #[arg(short = 'a', long)]
        addr: Option<String>,
    },

    /// Print the activities every server starts with, as JSON
    Activities,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match &cli.command {
        Command::Serve { config, addr } => {
            let cfg = config::resolve_config(config.as_deref())?;
            let addr = addr.clone().unwrap_or_else(|| cfg.server.addr());
            web::serve(&cfg, &addr).await?;
        }
        Command::Activities => {
            println!("{}", serde_json::to_string_pretty(&Directory::seeded())?);
        }
    }

    Ok(())
}
