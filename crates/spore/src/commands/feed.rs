//! Feed command - Atom feeds.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{Context, PageArgs};

/// Arguments for the feed command.
#[derive(Args, Debug)]
pub struct FeedArgs {
    #[command(subcommand)]
    pub command: FeedCommand,
}

#[derive(Subcommand, Debug)]
pub enum FeedCommand {
    /// Feed of all creations of a user
    UserAssets {
        /// Username
        username: String,
    },

    /// Feed of recent events for a user
    UserEvents {
        /// Username
        username: String,
    },

    /// Feed of recent events for an asset
    Asset {
        /// Asset id
        id: u64,
    },

    /// Feed of the assets in a sporecast
    Sporecast {
        /// Sporecast id
        id: u64,
    },

    /// Feed of creations for a search view
    Search {
        /// View, e.g. NEWEST or TOP_RATED
        view: String,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Run the feed command.
pub async fn run(args: FeedArgs, ctx: &Context) -> Result<()> {
    let feeds = ctx.client()?.feeds();

    let doc = match args.command {
        FeedCommand::UserAssets { username } => feeds.user_assets(&username).await?,
        FeedCommand::UserEvents { username } => feeds.user_events(&username).await?,
        FeedCommand::Asset { id } => feeds.asset_events(id).await?,
        FeedCommand::Sporecast { id } => feeds.sporecast(id).await?,
        FeedCommand::Search { view, page } => feeds.search(&view, page.into()).await?,
    };

    ctx.emit(&doc)
}
