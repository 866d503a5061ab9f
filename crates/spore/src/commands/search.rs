//! Search command - list creations for a view.

use anyhow::Result;
use clap::Args;

use super::{Context, PageArgs};

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// View: TOP_RATED, TOP_RATED_NEW, NEWEST, FEATURED, MAXIS_MADE, RANDOM, CUTE_AND_CREEPY
    pub view: String,

    /// Only list one asset type: UFO, CREATURE, BUILDING, VEHICLE
    #[arg(short = 't', long = "type")]
    pub asset_type: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

/// Run the search command.
///
/// Tokens are forwarded as typed; the service rejects unknown ones.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let assets = ctx.client()?.assets();

    let doc = match &args.asset_type {
        Some(asset_type) => {
            assets
                .search_by_type(&args.view, args.page.into(), asset_type)
                .await?
        }
        None => assets.search(&args.view, args.page.into()).await?,
    };

    ctx.emit(&doc)
}
