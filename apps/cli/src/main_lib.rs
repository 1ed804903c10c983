use std::process::ExitCode;
use std::sync::Arc;

use holdfolio_core::{HoldingsService, HoldingsServiceTrait};
use holdfolio_holdings_api::{HoldingsApi, HoldingsEndpoint, HttpNetworkClient, UserHoldingsApi};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::{Config, LogFormat};
use crate::render::{JsonReport, Renderer};

/// Logs go to stderr so that stdout only carries the report.
pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format == LogFormat::Json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_service(config: &Config) -> HoldingsService {
    let client = HttpNetworkClient::new(config.request_timeout);
    let endpoint = HoldingsEndpoint::new(config.api_url.clone());
    let api: Arc<dyn HoldingsApi> = Arc::new(UserHoldingsApi::with_client(client, endpoint));
    HoldingsService::new(api)
}

/// Loads holdings once and produces the text (or JSON) report.
pub async fn report(
    service: &dyn HoldingsServiceTrait,
    config: &Config,
    cli: &Cli,
) -> holdfolio_core::Result<String> {
    let snapshot = service.load().await?;

    if cli.json {
        let report = JsonReport::from(&snapshot);
        return serde_json::to_string_pretty(&report)
            .map_err(|e| holdfolio_core::Error::Unexpected(e.to_string()));
    }

    let renderer = Renderer::new(config.formatter(), config.color);
    Ok(renderer.render(&snapshot, cli.expanded))
}

pub async fn run(config: &Config, cli: &Cli) -> anyhow::Result<ExitCode> {
    let service = build_service(config);

    match report(&service, config, cli).await {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!("Holdings load failed: {}", e);
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
