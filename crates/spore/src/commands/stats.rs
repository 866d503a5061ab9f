//! Stats command - daily service stats.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the stats command.
#[derive(Args, Debug)]
pub struct StatsArgs {}

/// Run the stats command.
pub async fn run(_args: StatsArgs, ctx: &Context) -> Result<()> {
    let doc = ctx.client()?.daily_stats().await?;
    ctx.emit(&doc)
}
