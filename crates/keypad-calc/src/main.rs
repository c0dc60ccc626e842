//! keypad-calc: four-function calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc                              # interactive keypad
//! keypad-calc --script "5 + 3 ="           # replay labels, print display
//! keypad-calc --config calc.yaml -v        # custom limits, debug logging
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use keypad_calc::prelude::*;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "keypad-calc", version, about = "Four-function keypad calculator")]
struct Cli {
    /// JSON or YAML configuration file
    #[arg(short, long, env = "KEYPAD_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Whitespace-separated keypad labels to replay instead of running interactively
    #[arg(short, long)]
    script: Option<String>,

    /// Print the display after every label in script mode
    #[arg(long, requires = "script")]
    echo: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Errors surfaced by the binary
#[derive(Debug, Error)]
enum CliError {
    /// Configuration failed to load
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A script label was not understood
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("keypad_calc={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => {
            let config = CalculatorConfig::load(path)?;
            info!(path = %path.display(), "loaded configuration");
            config
        }
        None => CalculatorConfig::default(),
    };
    debug!(?config, "configuration");

    match &cli.script {
        Some(script) => run_script(config, script, cli.echo),
        None => Ok(keypad_calc::tui::run(config)?),
    }
}

fn run_script(config: CalculatorConfig, script: &str, echo: bool) -> CliResult<()> {
    let mut router = InputRouter::with_config(config, LineSurface::new());
    for label in script.split_whitespace() {
        router.press(label)?;
        if echo {
            println!("{label:>3}  {}", router.surface().text());
        }
    }
    if !echo {
        println!("{}", router.surface().text());
    }
    Ok(())
}
