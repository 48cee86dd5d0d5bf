//! Replays recorded encounter events and prints positional diagnoses.
//!
//! # Examples
//!
//! ```bash
//! # Events from a file
//! police --scenario pull.toml --events pull.events
//!
//! # Events piped from upstream log processing
//! tail -f combat.events | police --scenario pull.toml
//! ```
mod logging;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use encounter_content::ScenarioLoader;
use encounter_core::EncounterError;
use runtime::{InMemoryTelemetry, InMemoryVariables, Runtime, RuntimeConfig, WriterSink, parse_stream};

#[derive(Parser, Debug)]
#[command(name = "police")]
#[command(about = "Judges mechanic positioning from recorded encounter events", long_about = None)]
#[command(version)]
struct Cli {
    /// Scenario file with encounter variables and entity telemetry
    #[arg(short, long, value_name = "FILE")]
    scenario: PathBuf,

    /// Event record file; reads stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    events: Option<PathBuf>,

    /// Log to stderr only
    #[arg(long)]
    no_log_file: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(!cli.no_log_file)?;

    let config = RuntimeConfig::from_env();
    tracing::info!(
        ability_cap = config.encounter.ability_cap,
        total_cap = config.encounter.total_cap,
        "Configuration loaded"
    );

    let scenario = ScenarioLoader::load(&cli.scenario)?;
    let telemetry = InMemoryTelemetry::from_scenario(&scenario)
        .with_context(|| format!("Invalid entity in {}", cli.scenario.display()))?;
    let variables = InMemoryVariables::from_spec(&scenario.variables);
    tracing::info!(entities = telemetry.len(), "Scenario loaded");

    let mut runtime = Runtime::new(config, telemetry, variables, WriterSink::new(io::stdout()));

    let input = read_events(cli.events.as_ref())?;
    let records = parse_stream(&input);
    tracing::debug!(records = records.len(), "Replaying event stream");

    // Undecodable records are skipped inside `replay`; anything returned here is fatal.
    for (index, record) in records.iter().enumerate() {
        match runtime.replay(record) {
            Ok(outcome) => tracing::trace!(record = index, ?outcome, "record handled"),
            Err(err) => {
                tracing::error!(
                    record = index,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "{err}"
                );
                return Err(err.into());
            }
        }
    }

    tracing::info!("Replay complete");
    Ok(())
}

fn read_events(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read events from {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read events from stdin")?;
            Ok(input)
        }
    }
}
