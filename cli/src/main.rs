//! # Navigo Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Navigo CLI. It handles:
//! - Loading a `.env` file so credentials can be supplied there
//! - Command-line argument parsing using Clap
//! - Setting up logging (always on stderr; stdout belongs to command output)
//! - Routing execution to the command handlers and mapping failures to exit codes
//!
//! ## Examples
//!
//! ```bash
//! navigo bridge '{"prompt": "Where is my train?", "language": "hi"}'
//! navigo -v translate --lang ta
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand handlers (bridge, translate)
mod common; // Shared utilities (fs)
mod core; // Errors and configuration

use crate::core::error::NavigoError;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "navigo",
    about = "Navigo travel assistant bridge and string-table translator",
    long_about = "Answers chat turns for the Navigo app through a generative model \
                  (with offline keyword fallback) and translates UI string tables.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Answer one chat turn: JSON request in, JSON response out.
    #[command(alias = "b")]
    Bridge(commands::bridge::BridgeArgs),
    /// Translate a string table into another language.
    #[command(alias = "t")]
    Translate(commands::translate::TranslateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before parsing so clap's `env` fallbacks can see .env values.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Bridge(args) => commands::bridge::handle_bridge(args).await,
        Commands::Translate(args) => commands::translate::handle_translate(args).await,
    };

    if let Err(e) = command_result {
        if !matches!(e.downcast_ref::<NavigoError>(), Some(NavigoError::Reported)) {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            if core::error::is_config_error(&e) {
                eprintln!("Hint: credentials can be passed with --api-key, exported, or put in a .env file.");
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
