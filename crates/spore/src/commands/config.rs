//! Config command - configuration management.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};
use console::Style;

use spore_config::SporeConfig;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the resolved configuration
    Show,

    /// Show which config files are loaded and their precedence
    Which,

    /// Initialize a config file with defaults
    Init {
        /// Create project-local config (./spore.toml) instead of user config
        #[arg(long)]
        local: bool,
    },

    /// Show configuration file path
    Path,
}

/// Run the config command.
pub async fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show => cmd_show(),
        ConfigCommand::Which => cmd_which(),
        ConfigCommand::Init { local } => cmd_init(local),
        ConfigCommand::Path => cmd_path(),
    }
}

fn cmd_show() -> Result<()> {
    let loaded = spore_config::load_config(None)?;
    let config = &loaded.config;

    println!("# Spore Configuration\n");

    let sources = loaded.loaded_from();
    if sources.is_empty() {
        println!("No config files loaded (using defaults)\n");
    } else {
        println!("Config files:");
        for source in &sources {
            println!("  {}", source.display());
        }
        println!();
    }

    let client = config.client_settings()?;
    println!("Client:");
    println!("  base_url:   {}", client.base_url);
    println!("  timeout:    {}s", client.timeout.as_secs());
    if let Some(agent) = &client.user_agent {
        println!("  user_agent: {agent}");
    }
    println!();

    let download = config.download_settings()?;
    println!("Download:");
    println!("  output_dir: {}", download.output_dir.display());
    println!("  page_size:  {}", download.page_size);

    Ok(())
}

fn cmd_which() -> Result<()> {
    let loaded = spore_config::load_config(None)?;

    println!("Config file search order (later overrides earlier):\n");

    for source in &loaded.sources {
        let status = if source.loaded {
            "✓ loaded"
        } else {
            "· not found"
        };
        println!("  {} {}", status, source.path.display());
    }

    println!();
    let loaded_count = loaded.loaded_from().len();
    if loaded_count == 0 {
        println!("No config files found. Run 'spore config init' to create one.");
    } else {
        println!("{loaded_count} config file(s) loaded.");
    }

    Ok(())
}

fn cmd_init(local: bool) -> Result<()> {
    let path = if local {
        PathBuf::from("spore.toml")
    } else {
        spore_config::xdg_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?
    };

    if path.exists() {
        println!("Config file already exists: {}", path.display());
        return Ok(());
    }

    spore_config::save_config(&SporeConfig::with_defaults(), &path)?;

    let green = Style::new().green();
    println!("{} Created config file: {}", green.apply_to("✓"), path.display());
    println!();
    println!("Next steps:");
    println!("  spore config show    # verify configuration");
    println!("  spore stats          # try the service");

    Ok(())
}

fn cmd_path() -> Result<()> {
    match spore_config::xdg_config_path() {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("Could not determine config directory"),
    }
    Ok(())
}
