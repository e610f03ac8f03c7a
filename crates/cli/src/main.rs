// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ft - frame timer scenario driver

mod config;
mod driver;
mod env;
mod output;
mod scenarios;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use config::{ConfigFile, DriverConfig, Overrides};
use driver::FrameDriver;
use ft_core::{FakeClock, SystemClock};
use ft_engine::{Scheduler, TracingFaultReporter};
use output::{OutputFormat, Transcript};
use scenarios::Scenario;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ft",
    version,
    about = "Frame timers - drive scheduler scenarios frame by frame"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and print its transcript
    Run(RunArgs),
    /// List available scenarios
    Scenarios,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Scenario to run
    #[arg(value_enum)]
    scenario: Scenario,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Seconds to run (defaults to the scenario's own length)
    #[arg(long)]
    seconds: Option<f32>,

    /// Host time scale applied to the scaled delta
    #[arg(long = "time-scale")]
    time_scale: Option<f32>,

    /// Pace frames against the wall clock instead of simulating them
    #[arg(long)]
    realtime: bool,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl RunArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            fps: self.fps,
            seconds: self.seconds,
            host_time_scale: self.time_scale,
            realtime: self.realtime.then_some(true),
        }
    }
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

fn setup_logging() {
    let filter = env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise we render the full chain so context isn't
/// lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Run(args) => run_scenario(&args, format),
        Commands::Scenarios => list_scenarios(format),
    }
}

fn load_config(args: &RunArgs) -> Result<ConfigFile> {
    match args.config.clone().or_else(env::config_path) {
        Some(path) => ConfigFile::load(&path),
        None => Ok(ConfigFile::default()),
    }
}

fn run_scenario(args: &RunArgs, format: OutputFormat) -> Result<()> {
    let file = load_config(args)?;
    let config = DriverConfig::resolve(
        args.overrides()
            .or(Overrides::from_env())
            .or(file.driver.clone()),
    )?;

    let transcript = Transcript::new();
    for scenario in args.scenario.runs() {
        let scheduler = Scheduler::with_reporter(&file.scheduler, TracingFaultReporter);
        transcript.set_frame(0, 0.0);
        let hook = scenario.install(&scheduler, &transcript);
        let seconds = config.seconds.unwrap_or_else(|| scenario.default_seconds());
        let frames = config.frames_for(seconds);
        tracing::info!(
            scenario = scenario.as_str(),
            frames,
            fps = config.fps,
            realtime = config.realtime,
            "running scenario"
        );

        if config.realtime {
            let driver =
                FrameDriver::new(scheduler, SystemClock, config.fps, config.host_time_scale);
            driver.run(frames, &transcript, hook, std::thread::sleep);
        } else {
            let clock = FakeClock::new();
            let driver =
                FrameDriver::new(scheduler, clock.clone(), config.fps, config.host_time_scale);
            driver.run(frames, &transcript, hook, |step| clock.advance(step));
        }
    }

    output::print_transcript(&transcript.entries(), format)
}

fn list_scenarios(format: OutputFormat) -> Result<()> {
    let all = Scenario::INDIVIDUAL.iter().chain([&Scenario::All]);
    match format {
        OutputFormat::Text => {
            for scenario in all {
                println!("{:<12} {}", scenario.as_str(), scenario.description());
            }
        }
        OutputFormat::Json => {
            let listing: Vec<_> = all
                .map(|s| {
                    serde_json::json!({
                        "name": s.as_str(),
                        "description": s.description(),
                        "seconds": (*s != Scenario::All).then(|| s.default_seconds()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
