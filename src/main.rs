//! # Weather Dash Application Entry Point
//!
//! This binary wires configuration, the dataset, the wall clock and the
//! renderers together. By default it prints the dashboard once; with
//! `--interactive` it keeps running, reading navigation commands from stdin
//! and advancing the hour on an hourly timer. `--frame` additionally draws
//! the chart at the configured display size into a PBM image.


mod cli;
mod interactive;
mod logging;

use std::path::Path;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use weather_dash_lib::{
    clock::{FixedClock, HourClock, LocalClock},
    config::Config,
    dataset::Dataset,
    mock_data,
    renderer::{draw_ascii, render_frame},
    selection::{select, DashState, DataSource},
    HourOffset,
};

use crate::cli::Cli;

/// Load the configured dataset, falling back to the built-in mock data.
///
/// A broken dataset file should not take the dashboard down; the failure is
/// logged and the mock locations are shown instead.
fn load_dataset(config: &Config) -> Dataset {
    match &config.dashboard.dataset {
        Some(path) => Dataset::load_from_path(path).unwrap_or_else(|error| {
            tracing::warn!(path = %path.display(), "dataset load failed: {error}");
            tracing::warn!("falling back to built-in mock data");
            mock_data::builtin()
        }),
        None => mock_data::builtin(),
    }
}

/// Build the starting state, validating the requested location.
fn initial_state(
    dataset: &Dataset,
    location: &str,
    clock: &dyn HourClock,
) -> Result<DashState> {
    if !dataset.contains(location) {
        bail!(
            "unknown location {location:?}; available: {}",
            dataset.locations().join(", ")
        );
    }
    Ok(DashState::new(location, clock.current_hour()))
}

/// Draw the current selection at the `[display]` size and save it as PBM.
fn write_frame(
    dataset: &Dataset,
    state: &DashState,
    config: &Config,
    path: &Path,
) -> Result<()> {
    let selection = select(dataset, state).context("selecting series")?;
    render_frame(&selection, &config.display)
        .save_pbm(path)
        .with_context(|| format!("writing frame to {}", path.display()))
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_from_path(&cli.config);
    let dataset = load_dataset(&config);

    if let Some(path) = &cli.export_dataset {
        dataset
            .save_to_path(path)
            .with_context(|| format!("writing dataset to {}", path.display()))?;
        return Ok(());
    }

    if cli.list {
        for name in dataset.locations() {
            println!("{name}");
        }
        return Ok(());
    }

    let clock: Box<dyn HourClock> = match cli.hour {
        Some(hour) => Box::new(FixedClock(HourOffset::new(hour as usize)?)),
        None => Box::new(LocalClock),
    };

    let location = cli
        .location
        .clone()
        .unwrap_or_else(|| config.dashboard.location.clone());
    let state = initial_state(&dataset, &location, clock.as_ref())?;

    tracing::info!(
        location = %state.location(),
        hour = %state.hour(),
        interactive = cli.interactive,
        "starting dashboard"
    );

    if cli.interactive {
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(interactive::run(
            &dataset,
            state,
            config.display.chart_columns,
        ));
    }

    if let Some(path) = &cli.frame {
        write_frame(&dataset, &state, &config, path)?;
    }

    let selection = select(&dataset, &state).context("selecting series")?;
    draw_ascii(&selection, config.display.chart_columns);
    Ok(())
}

/// Main application entry point.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
