//! User command - profiles and user-scoped listings.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{Context, PageArgs};

/// Arguments for the user command.
#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Show profile pic, tagline, user id and creation date
    Profile {
        /// Username
        username: String,
    },

    /// List creations made by the user
    Assets {
        /// Username
        username: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List unlocked achievements
    Achievements {
        /// Username
        username: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List the user's buddies
    Buddies {
        /// Username
        username: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List users who added this user as a buddy
    Subscribers {
        /// Username
        username: String,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Run the user command.
pub async fn run(args: UserArgs, ctx: &Context) -> Result<()> {
    let users = ctx.client()?.users();

    let doc = match args.command {
        UserCommand::Profile { username } => users.profile(&username).await?,
        UserCommand::Assets { username, page } => users.assets(&username, page.into()).await?,
        UserCommand::Achievements { username, page } => {
            users.achievements(&username, page.into()).await?
        }
        UserCommand::Buddies { username, page } => users.buddies(&username, page.into()).await?,
        UserCommand::Subscribers { username, page } => {
            users.subscribers(&username, page.into()).await?
        }
    };

    ctx.emit(&doc)
}
