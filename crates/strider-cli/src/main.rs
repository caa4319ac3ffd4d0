//! Strider CLI: simulation, benchmarking, and debugging.

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser)]
#[command(name = "strider")]
#[command(version, about = "Strider: VR body representation engine")]
struct Cli {
    /// Logging verbosity (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from an input file.
    Simulate {
        /// Path to simulation input (TOML or JSON).
        #[arg(short, long, default_value = "simulation.toml")]
        config: String,

        /// Write a binary frame trace to this path.
        #[arg(short, long)]
        trace: Option<String>,

        /// Log every body event.
        #[arg(short, long)]
        events: bool,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (standing, ledge_step_off, stair_climb, held_prop, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a frame trace file.
    Inspect {
        /// Path to trace file.
        path: String,

        /// Print every recorded frame.
        #[arg(short, long)]
        frames: bool,
    },

    /// Validate a simulation input.
    Validate {
        /// Path to input file (TOML or JSON).
        path: String,
    },
}

fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let result = match cli.command {
        Commands::Simulate { config, trace, events } => {
            commands::simulate(&config, trace.as_deref(), events)
        }
        Commands::Benchmark { scenario, output } => commands::benchmark(&scenario, output.as_deref()),
        Commands::Inspect { path, frames } => commands::inspect(&path, frames),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
