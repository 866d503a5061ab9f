//! Asset command - asset info, comments, model XML and images.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, PageArgs};

/// Arguments for the asset command.
#[derive(Args, Debug)]
pub struct AssetArgs {
    #[command(subcommand)]
    pub command: AssetCommand,
}

#[derive(Subcommand, Debug)]
pub enum AssetCommand {
    /// Show name, description, tags, rating, author and latest comments
    Info {
        /// Asset id
        id: u64,
    },

    /// Show height, diet, abilities and other creature stats
    Creature {
        /// Asset id of a creature
        id: u64,
    },

    /// List comments on the asset
    Comments {
        /// Asset id
        id: u64,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the model XML of the asset
    Model {
        /// Asset id
        id: u64,
    },

    /// Save the large preview PNG (default: <id>_lrg.png)
    Image {
        /// Asset id
        id: u64,
    },

    /// Save the thumbnail PNG, usable in game (default: <id>.png)
    Thumb {
        /// Asset id
        id: u64,
    },
}

/// Run the asset command.
pub async fn run(args: AssetArgs, ctx: &Context) -> Result<()> {
    let assets = ctx.client()?.assets();

    let doc = match args.command {
        AssetCommand::Info { id } => assets.info(id).await?,
        AssetCommand::Creature { id } => assets.creature_stats(id).await?,
        AssetCommand::Comments { id, page } => assets.comments(id, page.into()).await?,
        AssetCommand::Model { id } => assets.model_xml(id).await?,
        AssetCommand::Image { id } => {
            let dest = image_dest(ctx, format!("{id}_lrg.png"));
            let bytes = assets.download_large_image(id, &dest).await?;
            return report_saved(&dest, bytes);
        }
        AssetCommand::Thumb { id } => {
            let dest = image_dest(ctx, format!("{id}.png"));
            let bytes = assets.download_thumbnail(id, &dest).await?;
            return report_saved(&dest, bytes);
        }
    };

    ctx.emit(&doc)
}

fn image_dest(ctx: &Context, default_name: String) -> PathBuf {
    ctx.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_name))
}

fn report_saved(dest: &std::path::Path, bytes: u64) -> Result<()> {
    let green = Style::new().green();
    let dim = Style::new().dim();
    eprintln!(
        "{} Saved {} {}",
        green.apply_to("✓"),
        dest.display(),
        dim.apply_to(format!("({bytes} bytes)"))
    );
    Ok(())
}
