use clap::Parser;
use holdfolio_core::utils::DigitGrouping;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "holdfolio")]
#[command(about = "Show your stock holdings and portfolio profit & loss", version)]
#[command(
    after_help = "Examples:\n  holdfolio\n  holdfolio --expanded\n  holdfolio --json --url http://localhost:8080/holdings\n"
)]
pub struct Cli {
    /// Holdings endpoint URL (overrides HF_API_URL).
    #[arg(long)]
    pub url: Option<String>,

    /// Show the full summary panel instead of the collapsed header.
    #[arg(long, short = 'e', default_value_t = false)]
    pub expanded: bool,

    /// Print holdings and summary as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Disable coloured gains and losses.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Digit grouping for amounts: indian or standard (overrides HF_DIGIT_GROUPING).
    #[arg(long)]
    pub grouping: Option<DigitGrouping>,

    /// Request timeout in milliseconds (overrides HF_REQUEST_TIMEOUT_MS).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,
}
