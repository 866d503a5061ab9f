//! Download command - bulk download of a user's or sporecast's creations.
//!
//! Walks the listing page by page and saves, for each asset, its model XML
//! as served (`<id>.xml`), its thumbnail (`<id>.png`) and optionally its large preview
//! (`<id>_lrg.png`). A failed asset is logged and skipped; the command fails
//! at the end if any asset could not be saved.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result, bail};
use clap::{ArgGroup, Args};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use spore_client::{AssetSummary, Page, SporeClient, XmlDocument};

use super::Context;

/// Arguments for the download command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["user", "sporecast"])))]
pub struct DownloadArgs {
    /// Download the creations of this user
    #[arg(short, long)]
    pub user: Option<String>,

    /// Download the assets of this sporecast
    #[arg(short, long)]
    pub sporecast: Option<u64>,

    /// Directory to save into (default: from config, else current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Also save the large preview image
    #[arg(long)]
    pub large: bool,

    /// Stop after this many assets
    #[arg(long)]
    pub limit: Option<usize>,

    /// Items requested per listing page
    #[arg(long)]
    pub page_size: Option<u32>,
}

/// Where the asset listing comes from.
#[derive(Debug, Clone)]
enum Source {
    User(String),
    Sporecast(u64),
}

impl Source {
    async fn list(&self, client: &SporeClient, page: Page) -> spore_client::Result<XmlDocument> {
        match self {
            Source::User(name) => client.users().assets(name, page).await,
            Source::Sporecast(id) => client.sporecasts().assets(*id, page).await,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::User(name) => write!(f, "user {name}"),
            Source::Sporecast(id) => write!(f, "sporecast {id}"),
        }
    }
}

/// Run the download command.
pub async fn run(args: DownloadArgs, ctx: &Context) -> Result<()> {
    let source = match (args.user, args.sporecast) {
        (Some(name), _) => Source::User(name),
        (None, Some(id)) => Source::Sporecast(id),
        (None, None) => bail!("either --user or --sporecast is required"),
    };
    let dir = args.dir.unwrap_or_else(|| ctx.download.output_dir.clone());
    let page_size = args.page_size.unwrap_or(ctx.download.page_size);
    if page_size == 0 {
        bail!("--page-size must be greater than zero");
    }

    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let client = ctx.client()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message(format!("Listing {source}"));

    let mut page = Page::new(0, page_size);
    let mut saved = 0usize;
    let mut failed = 0usize;

    'pages: loop {
        let listing = source
            .list(&client, page)
            .await
            .with_context(|| format!("failed to list {source} at {page}"))?;
        let listed = listing.asset_count();
        let assets = listing.asset_summaries();
        tracing::debug!(%page, listed, usable = assets.len(), "listed assets");
        if assets.len() < listed {
            tracing::warn!(
                %page,
                skipped = listed - assets.len(),
                "listing entries without a numeric id"
            );
        }

        for asset in &assets {
            if args.limit.is_some_and(|limit| saved + failed >= limit) {
                break 'pages;
            }
            spinner.set_message(format!("Downloading {}", describe(asset)));

            match save_asset(&client, asset.id, &dir, args.large).await {
                Ok(()) => {
                    saved += 1;
                    if ctx.verbose {
                        spinner.println(format!("  saved {}", describe(asset)));
                    }
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!(asset_id = asset.id, error = %e, "failed to download asset");
                }
            }
        }

        let limit_reached = args.limit.is_some_and(|limit| saved + failed >= limit);
        if limit_reached || listed < page_size as usize {
            break;
        }
        page = page.next();
    }

    spinner.finish_and_clear();

    let green = Style::new().green();
    println!(
        "{} Downloaded {} asset(s) from {} into {}",
        green.apply_to("✓"),
        saved,
        source,
        dir.display()
    );

    if failed > 0 {
        bail!("{failed} asset(s) could not be downloaded");
    }
    Ok(())
}

async fn save_asset(client: &SporeClient, id: u64, dir: &Path, large: bool) -> Result<()> {
    let assets = client.assets();

    assets
        .download_model_xml(id, dir.join(format!("{id}.xml")))
        .await?;
    assets
        .download_thumbnail(id, dir.join(format!("{id}.png")))
        .await?;

    if large {
        assets
            .download_large_image(id, dir.join(format!("{id}_lrg.png")))
            .await?;
    }
    Ok(())
}

fn describe(asset: &AssetSummary) -> String {
    match &asset.name {
        Some(name) => format!("{} ({name})", asset.id),
        None => asset.id.to_string(),
    }
}
