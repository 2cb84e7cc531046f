//! CLI entry point for treedump

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use treedump::{DEFAULT_OUTPUT_FILE, DumpConfig, print_confirmation, run};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treedump")]
#[command(
    about = "Dump the current directory's tree and interesting source files into one text report"
)]
#[command(version)]
struct Args {
    /// Report file, relative to the current directory
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Don't print the confirmation line
    #[arg(short, long)]
    quiet: bool,
}

/// Log level for a `-v` count. `RUST_LOG` wins when set.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn setup_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);
    debug!("Parsed CLI arguments: {args:?}");

    let config = match DumpConfig::from_current_dir() {
        Ok(config) => config.with_output(&args.output),
        Err(e) => {
            eprintln!("treedump: {}", e);
            process::exit(1);
        }
    };

    let output_path = match run(&config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("treedump: {}", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Err(e) = print_confirmation(&output_path, should_use_color(args.color)) {
            eprintln!("treedump: error writing output: {}", e);
            process::exit(1);
        }
    }
}
