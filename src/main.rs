//! AnyClaude model tester
//!
//! Checks that Gemini and Anthropic credentials work before pointing
//! anyclaude at them: reports the relevant environment, lists Gemini models,
//! sends a short prompt to a fixed set of models, and optionally replays the
//! prompt through a running anyclaude proxy. Always exits 0.

mod core;
mod models;
mod tester;

use crate::core::config::Config;
use crate::core::constants::{env, url};
use crate::core::logging::init_logging;
use crate::tester::ModelTester;
use crate::tester::report::{Reporter, Tally};
use anyhow::{Context, Result};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if std::env::args().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return;
    }

    // A missing .env file is fine
    dotenv::dotenv().ok();

    let log_level = std::env::var(env::LOG_LEVEL).unwrap_or_else(|_| "warn".to_string());
    init_logging(&log_level);

    match run().await {
        Ok(tally) => debug!("Run finished: {:?}", tally),
        Err(e) => eprintln!("Report Error: {:#}", e),
    }
}

async fn run() -> Result<Tally> {
    let config = Config::from_env();
    debug!("Loaded configuration: proxy={:?}", config.proxy_url);

    let tester = ModelTester::new(config);
    let mut report = Reporter::new(std::io::stdout());
    tester
        .run(&mut report)
        .await
        .context("Failed to write report to stdout")?;

    Ok(report.tally())
}

/// Print help message
fn print_help() {
    println!("AnyClaude Model Tester v0.1.0");
    println!();
    println!("Usage: anyclaude-model-tester [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -h, --help    Display this help message");
    println!();
    println!("Environment variables (a .env file in the current directory is also read):");
    println!("  GOOGLE_API_KEY - Gemini API key; enables the Google section");
    println!(
        "  GOOGLE_API_URL - Gemini API base URL (default: {})",
        url::GOOGLE_DEFAULT
    );
    println!("  ANTHROPIC_API_KEY - Anthropic API key; enables the Anthropic section");
    println!(
        "  ANTHROPIC_BASE_URL - Anthropic API base URL (default: {})",
        url::ANTHROPIC_DEFAULT
    );
    println!("  ANYCLAUDE_PROXY_URL - URL of a running anyclaude proxy; enables the proxy section");
    println!("  LOG_LEVEL - Diagnostic log level on stderr (default: warn)");
    println!();
    println!("Timeouts: 10s for model listing, 30s per chat request. No retries.");
}
