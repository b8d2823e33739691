use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GeoQuest - location-based quiz over real-world checkpoints
#[derive(Parser, Debug)]
#[command(name = "geoquest")]
#[command(about = "Location-based quiz over real-world checkpoints", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a GeoJSON quest catalog (defaults to the built-in set)
    #[arg(long, global = true, value_name = "PATH")]
    pub quests: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Proximity threshold in meters
    #[arg(long, global = true, value_name = "METERS")]
    pub threshold: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the quests in the catalog
    List,

    /// Validate a quest catalog file
    Validate(ValidateArgs),

    /// Show the effective configuration and where each value came from
    Status,

    /// Play a quiz session in the terminal
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the GeoJSON quest catalog to check
    pub path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct PlayArgs {
    /// Starting latitude for the session
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Starting longitude for the session
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,
}
