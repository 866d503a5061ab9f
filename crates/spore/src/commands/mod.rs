//! CLI command handlers.

pub mod asset;
pub mod config;
pub mod download;
pub mod feed;
pub mod search;
pub mod sporecast;
pub mod stats;
pub mod user;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use console::Style;
use spore_client::{Page, SporeClient, XmlDocument};
use spore_config::{ClientSettings, DownloadSettings};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved connection settings.
    pub settings: ClientSettings,
    /// Resolved bulk download settings.
    pub download: DownloadSettings,
    /// Where to write results instead of stdout.
    pub output: Option<PathBuf>,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Load config files and apply command-line overrides.
    pub fn load(server: Option<String>, output: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let loaded = spore_config::load_config(None).context("failed to load configuration")?;
        for path in loaded.loaded_from() {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        let mut settings = loaded.config.client_settings()?;
        if let Some(server) = server {
            settings.base_url = server;
        }

        Ok(Self {
            settings,
            download: loaded.config.download_settings()?,
            output,
            verbose,
        })
    }

    /// Build a client for the configured service.
    pub fn client(&self) -> Result<SporeClient> {
        SporeClient::from_settings(&self.settings)
            .with_context(|| format!("invalid service URL '{}'", self.settings.base_url))
    }

    /// Print a document, or save it when `--output` was given.
    pub fn emit(&self, doc: &XmlDocument) -> Result<()> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, doc.to_string())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                let green = Style::new().green();
                eprintln!("{} Saved {}", green.apply_to("✓"), path.display());
            }
            None => println!("{doc}"),
        }
        Ok(())
    }
}

/// Pagination window shared by every listing command.
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Index of the first item
    #[arg(long, default_value_t = 0)]
    pub start: u32,

    /// Number of items to request
    #[arg(long, default_value_t = 10)]
    pub length: u32,
}

impl From<PageArgs> for Page {
    fn from(args: PageArgs) -> Self {
        Page::new(args.start, args.length)
    }
}
