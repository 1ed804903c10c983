use std::process::ExitCode;

use clap::Parser;
use holdfolio_cli::{init_tracing, run, Cli, Config};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_cli(&cli);
    init_tracing(config.log_format);
    tracing::debug!("Using holdings endpoint {}", config.api_url);
    run(&config, &cli).await
}
