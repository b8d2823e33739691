//! Command implementations

mod list;
mod play;
mod status;
mod validate;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;
use geoquest_core::catalog;
use geoquest_core::config::{CliConfigOverrides, LayeredConfig};
use geoquest_core::models::Quest;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::List => list::execute(&config, &output),
        Commands::Validate(args) => validate::execute(args, &output),
        Commands::Status => status::execute(&config, &output),
        Commands::Play(args) => play::execute(args, &config, &output),
    }
}

fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = match &cli.config {
        Some(path) => LayeredConfig::with_defaults().load_from_file(path)?,
        None => LayeredConfig::with_defaults(),
    }
    .load_from_env();

    config.update_from_cli(CliConfigOverrides {
        proximity_threshold_m: cli.threshold,
        award_points: None,
        quest_file: cli.quests.clone(),
    });

    Ok(config)
}

/// Load the configured quest catalog, falling back to the built-in set.
pub(crate) fn load_quests(config: &LayeredConfig) -> Result<Vec<Quest>> {
    let quests = match config.quest_file.value.as_ref() {
        Some(path) => catalog::load_quest_file(path)?,
        None => catalog::builtin_quests(),
    };
    tracing::debug!(quests = quests.len(), "loaded quest catalog");
    Ok(quests)
}
