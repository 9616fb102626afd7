//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "pokecard", version, about = "Browse Pokémon cards in the terminal")]
pub struct Cli {
    /// Pokédex number to show first (1-800)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=800))]
    pub id: Option<u16>,

    /// Config file path (default: ~/.config/pokecard/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API collection endpoint
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(id) = self.id {
            config.ui.start_id = id;
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
