// src/main.rs
use anyhow::Result;
use std::process::ExitCode;
use tracing::info;

use backend_preflight::{
    checks::Checker,
    config::{self, Config},
    report,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing. Diagnostics go to stderr so the report on
    // stdout stays clean; enable with RUST_LOG=backend_preflight=debug.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load configuration: optional file path as first argument,
    // built-in defaults otherwise.
    let config = match std::env::args().nth(1) {
        Some(config_path) => {
            info!("Loading configuration from: {}", config_path);
            config::load_config(&config_path).await?
        }
        None => Config::default(),
    };

    let checker = Checker::new(&config)?;

    report::print_header(&config);
    let results = checker.run_all().await;
    report::print_summary(&config, &results);

    Ok(ExitCode::from(report::exit_code(&results)))
}
