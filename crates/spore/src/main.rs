//! Spore - command-line downloader for the Spore content service.
//!
//! Main entry point for the Spore CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod commands;

use commands::{asset, config, download, feed, search, sporecast, stats, user};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Spore - browse and download creations from the Spore content service
#[derive(Parser)]
#[command(name = "spore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Service URL (default: http://www.spore.com)
    #[arg(long, global = true, env = "SPORE_BASE_URL")]
    pub server: Option<String>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show daily stats about the service
    Stats(stats::StatsArgs),

    /// User profiles, creations, achievements and buddies
    User(user::UserArgs),

    /// Asset info, comments, model XML and images
    Asset(asset::AssetArgs),

    /// Sporecast listings
    Sporecast(sporecast::SporecastArgs),

    /// Search creations by view
    Search(search::SearchArgs),

    /// Atom feeds
    Feed(feed::FeedArgs),

    /// Download every creation of a user or sporecast
    Download(download::DownloadArgs),

    /// Configuration management
    Config(config::ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only ever carries documents.
    let filter = if cli.verbose {
        "spore=debug,spore_client=debug,spore_config=debug,info"
    } else {
        "spore=info,spore_client=warn,warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
                ),
        )
        .init();

    let Cli {
        server,
        output,
        verbose,
        command,
    } = cli;
    // Config commands must work even when the config on disk is broken, so
    // the context is only loaded by the commands that talk to the service.
    let ctx = move || commands::Context::load(server, output, verbose);

    match command {
        Commands::Stats(args) => stats::run(args, &ctx()?).await,
        Commands::User(args) => user::run(args, &ctx()?).await,
        Commands::Asset(args) => asset::run(args, &ctx()?).await,
        Commands::Sporecast(args) => sporecast::run(args, &ctx()?).await,
        Commands::Search(args) => search::run(args, &ctx()?).await,
        Commands::Feed(args) => feed::run(args, &ctx()?).await,
        Commands::Download(args) => download::run(args, &ctx()?).await,
        Commands::Config(args) => config::run(args).await,
    }
}
