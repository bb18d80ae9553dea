//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_tracker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing summary output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ip_tracker::initialization::init_logger_with;
use ip_tracker::{run_lookups, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting IPIFY_API_KEY in .env without exporting it manually
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output;
    match run_lookups(config).await {
        Ok(report) => {
            // Keep stdout clean for JSON consumers; the panel gets a summary
            if output == OutputFormat::Panel {
                println!(
                    "Processed {} submission{} ({} succeeded, {} failed)",
                    report.submissions,
                    if report.submissions == 1 { "" } else { "s" },
                    report.successful,
                    report.failed
                );
            } else {
                log::info!(
                    "Processed {} submissions ({} succeeded, {} failed)",
                    report.submissions,
                    report.successful,
                    report.failed
                );
            }
            if report.successful == 0 {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("ip_tracker error: {:#}", e);
            process::exit(1);
        }
    }
}
