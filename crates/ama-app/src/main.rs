//! `ama` entry point
//!
//! Run with:
//! ```bash
//! cargo run -p ama-app -- create "Launch Q&A"
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`), then
//! overridden by command line flags.

use ama_app::cli::Cli;
use ama_app::{App, AppContext, TerminalNotifier};
use ama_common::{try_init_tracing_with_config, AppResult, ClientConfig, TracingConfig};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ClientConfig::from_env()
        .map_err(Into::into)
        .and_then(|config| cli.apply_overrides(config))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing
    let mut tracing_config = TracingConfig::for_environment(config.app.env);
    tracing_config.json |= cli.json_logs;
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        api = %config.api.rest_url,
        ws = %config.api.ws_url,
        "Configuration loaded"
    );

    match run(cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            error!(code = e.error_code(), error = %e, "ama failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: &ClientConfig) -> AppResult<ExitCode> {
    let app = App::new(AppContext::from_config(config, Arc::new(TerminalNotifier))?);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();

    if cli.execute(&app, &mut lines, &mut out).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
