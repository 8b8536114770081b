//! Interactive dashboard loop.
//!
//! Reads one command per stdin line and redraws after every change. A
//! separate hourly timer advances the hour, mirroring a wall clock that
//! ticks while the dashboard stays open.

use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Duration, Instant};
use weather_dash_lib::{
    dataset::Dataset,
    navigation::Command,
    renderer::draw_ascii,
    selection::{select, DashState, DataSource},
};

const HOUR: Duration = Duration::from_secs(3600);

/// What the loop does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Redraw,
    Print(String),
    Quit,
}

/// Apply one command to the dashboard state.
pub fn apply(dataset: &Dataset, state: &mut DashState, command: Command) -> Step {
    match command {
        Command::Navigate(control) => {
            state.navigate(control.direction());
            Step::Redraw
        }
        Command::SelectLocation(name) => {
            // Accept any capitalisation of a known name
            let name = dataset
                .locations()
                .into_iter()
                .find(|l| l.eq_ignore_ascii_case(&name))
                .map(str::to_string)
                .unwrap_or(name);
            match state.select_location(dataset, &name) {
                Ok(()) => Step::Redraw,
                Err(e) => Step::Print(format!("{e} (type `list` to see locations)")),
            }
        }
        Command::ListLocations => Step::Print(dataset.locations().join("\n")),
        Command::Tick => {
            state.tick();
            Step::Redraw
        }
        Command::Quit => Step::Quit,
    }
}

fn redraw(dataset: &Dataset, state: &DashState, columns: usize) -> Result<()> {
    let selection = select(dataset, state)?;
    println!();
    draw_ascii(&selection, columns);
    Ok(())
}

/// Run until `quit` or end of input.
pub async fn run(dataset: &Dataset, mut state: DashState, columns: usize) -> Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut hourly = interval_at(Instant::now() + HOUR, HOUR);

    redraw(dataset, &state, columns)?;

    loop {
        tokio::select! {
            _ = hourly.tick() => {
                state.tick();
                redraw(dataset, &state, columns)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match line.parse::<Command>() {
                    Ok(command) => match apply(dataset, &mut state, command) {
                        Step::Redraw => redraw(dataset, &state, columns)?,
                        Step::Print(text) => println!("{text}"),
                        Step::Quit => break,
                    },
                    Err(e) => eprintln!("{e}"),
                }
            }
        }
    }

    Ok(())
}
