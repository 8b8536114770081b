use std::path::PathBuf;

use clap::Parser;
use weather_dash_lib::config::CONFIG_FILE;

/// Hourly weather dashboard with temperature, precipitation and moisture views.
#[derive(Parser, Debug)]
#[command(name = "weather-dash", version, about)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Location to show, overriding the config file.
    #[arg(short, long)]
    pub location: Option<String>,

    /// Hour of day (0-23) to start the chart at instead of the wall clock.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..24))]
    pub hour: Option<u8>,

    /// Keep running: read navigation commands from stdin and tick hourly.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the available locations and exit.
    #[arg(long)]
    pub list: bool,

    /// Also draw the chart at the configured display size into a PBM image.
    #[arg(long, value_name = "PATH", conflicts_with = "interactive")]
    pub frame: Option<PathBuf>,

    /// Write the dataset in use to a JSON file and exit.
    #[arg(long, value_name = "PATH")]
    pub export_dataset: Option<PathBuf>,
}
