//! Config subcommands handler

use anyhow::{bail, Result};
use clap::Subcommand;

use qbank::Config;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(not(tarpaulin_include))]
pub fn handle(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => handle_show(),
        ConfigCommand::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
        ConfigCommand::Init { force } => handle_init(force),
    }
}

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Write a starter config with example label mappings.
#[cfg(not(tarpaulin_include))]
fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let mut config = Config::default();
    config.labels.topics.insert("A".into(), "Topic A".into());
    config
        .labels
        .sections
        .insert("short".into(), "Short answer".into());
    config.save()?;

    println!("Wrote {}", path.display());
    Ok(())
}
