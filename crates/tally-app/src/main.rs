//! Headless demo host — drives the telemetry pipeline with a deterministic
//! scripted sortie and writes the combat log to a file or stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tally_core::config::TelemetryConfig;
use tally_engine::errors::SinkError;
use tally_engine::pipeline::TelemetryPipeline;
use tally_engine::sinks::{NoticeSink, WriterLogSink};

mod scenario;

#[derive(Parser, Debug)]
#[command(name = "tally", about = "Combat-event telemetry aggregator demo host")]
struct Args {
    /// RNG seed for the scripted sortie. Same seed, same session.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Scripted session length in simulated seconds.
    #[arg(long, default_value_t = 180.0)]
    duration_secs: f64,

    /// Suppress notifications and DEBUG-level log output.
    #[arg(long)]
    quiet: bool,

    /// Roster reconciliation cadence in simulated seconds.
    #[arg(long, default_value_t = 5.0)]
    poll_interval: f64,

    /// Write the combat log to this file instead of stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Prints notifications to stderr so they interleave cleanly with a stdout log.
struct ConsoleNoticeSink;

impl NoticeSink for ConsoleNoticeSink {
    fn show(&mut self, message: &str) -> Result<(), SinkError> {
        eprintln!("** {message}");
        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let writer: Box<dyn Write> = match &args.log_file {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(file),
            Err(err) => {
                eprintln!("cannot open log file {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdout()),
    };

    let cfg = TelemetryConfig {
        debug_enabled: !args.quiet,
        roster_poll_interval_secs: args.poll_interval,
        ..Default::default()
    };

    let mut pipeline =
        match TelemetryPipeline::start(cfg, 0.0, WriterLogSink::new(writer), ConsoleNoticeSink) {
            Ok(pipeline) => pipeline,
            Err(err) => {
                eprintln!("session failed to start: {err}");
                return ExitCode::FAILURE;
            }
        };

    scenario::run(&mut pipeline, args.seed, args.duration_secs);
    ExitCode::SUCCESS
}
