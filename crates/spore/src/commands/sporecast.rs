//! Sporecast command - sporecast listings.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{Context, PageArgs};

/// Arguments for the sporecast command.
#[derive(Args, Debug)]
pub struct SporecastArgs {
    #[command(subcommand)]
    pub command: SporecastCommand,
}

#[derive(Subcommand, Debug)]
pub enum SporecastCommand {
    /// List the assets in a sporecast
    Assets {
        /// Sporecast id
        id: u64,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Run the sporecast command.
pub async fn run(args: SporecastArgs, ctx: &Context) -> Result<()> {
    let sporecasts = ctx.client()?.sporecasts();

    let doc = match args.command {
        SporecastCommand::Assets { id, page } => sporecasts.assets(id, page.into()).await?,
    };

    ctx.emit(&doc)
}
