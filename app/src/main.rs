// In app/src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

mod pipeline;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A dual-SMA crossover signal emitter.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reads a JSON request on stdin and writes the signal to stdout.
    Signal {
        /// Print only the bare signal word (BUY, SELL or HOLD).
        #[arg(long)]
        plain: bool,

        /// Symbol override (informational, echoed in the response).
        #[arg(long)]
        symbol: Option<String>,

        /// Short SMA window override.
        #[arg(long)]
        short: Option<u32>,

        /// Long SMA window override.
        #[arg(long)]
        long: Option<u32>,

        /// Load settings from this TOML file instead of the layered sources.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Logs go to stderr: stdout carries nothing but the response, so the
    // binary stays safely pipeable.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            tracing_subscriber::filter::Targets::new().with_default(tracing::Level::INFO),
        );
    tracing_subscriber::registry().with(fmt_layer).init();

    // Parse command-line arguments.
    let cli = Cli::parse();

    match cli.command {
        Commands::Signal {
            plain,
            symbol,
            short,
            long,
            config,
        } => run_signal(plain, symbol, short, long, config),
    }
}

fn run_signal(
    plain: bool,
    symbol: Option<String>,
    short: Option<u32>,
    long: Option<u32>,
    config: Option<PathBuf>,
) -> Result<()> {
    let mut settings = match &config {
        Some(path) => app_config::load_settings_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => app_config::load_settings().context("loading layered settings")?,
    };
    if let Some(symbol) = symbol {
        settings.symbol = symbol;
    }
    if let Some(short) = short {
        settings.short_period = short;
    }
    if let Some(long) = long {
        settings.long_period = long;
    }

    // Mistakes in flags, env or file fail the process here, before stdin is
    // touched. Anything arriving on stdin can only degrade the response.
    settings.validate()?;

    let input = std::io::read_to_string(std::io::stdin())?;
    let response = pipeline::evaluate(&input, &settings);

    tracing::info!(symbol = %response.symbol, signal = %response.signal, "signal evaluated");

    if plain {
        println!("{}", response.signal);
    } else {
        println!("{}", serde_json::to_string(&response)?);
    }

    Ok(())
}
