use std::str::FromStr;
use std::time::Duration;

use holdfolio_core::constants::DEFAULT_CURRENCY_SYMBOL;
use holdfolio_core::utils::{DigitGrouping, PriceFormatter};
use holdfolio_core::Error;
use holdfolio_holdings_api::DEFAULT_HOLDINGS_URL;

use crate::cli::Cli;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Output format of the log layer on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown log format '{}'",
                other
            ))),
        }
    }
}

/// Parses a request timeout in milliseconds; zero is rejected.
fn parse_timeout_ms(value: &str) -> Result<u64, Error> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(Error::InvalidConfigValue(format!(
            "HF_REQUEST_TIMEOUT_MS must be a positive number of milliseconds, got '{}'",
            value
        ))),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    pub digit_grouping: DigitGrouping,
    pub currency_symbol: String,
    pub color: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_HOLDINGS_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            digit_grouping: DigitGrouping::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            color: true,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Reads `.env` (if present) and the `HF_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("HF_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_url);
        let timeout_ms = match lookup("HF_REQUEST_TIMEOUT_MS") {
            Some(value) => parse_timeout_ms(&value)?,
            None => DEFAULT_TIMEOUT_MS,
        };
        let digit_grouping = match lookup("HF_DIGIT_GROUPING") {
            Some(value) => value.parse()?,
            None => defaults.digit_grouping,
        };
        let currency_symbol = lookup("HF_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);
        let color = lookup("NO_COLOR").map_or(true, |v| v.is_empty());
        let log_format = match lookup("HF_LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            api_url,
            request_timeout: Duration::from_millis(timeout_ms),
            digit_grouping,
            currency_symbol,
            color,
            log_format,
        })
    }

    /// Applies command-line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.url {
            self.api_url = url.clone();
        }
        if let Some(grouping) = cli.grouping {
            self.digit_grouping = grouping;
        }
        if let Some(timeout_ms) = cli.timeout_ms {
            self.request_timeout = Duration::from_millis(timeout_ms);
        }
        if cli.no_color {
            self.color = false;
        }
        self
    }

    pub fn formatter(&self) -> PriceFormatter {
        PriceFormatter::new(self.currency_symbol.clone(), self.digit_grouping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, DEFAULT_HOLDINGS_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.digit_grouping, DigitGrouping::Indian);
        assert_eq!(config.currency_symbol, "₹");
        assert!(config.color);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("HF_API_URL", "http://localhost:8080/"),
            ("HF_REQUEST_TIMEOUT_MS", "2500"),
            ("HF_DIGIT_GROUPING", "standard"),
            ("HF_CURRENCY_SYMBOL", "$"),
            ("NO_COLOR", "1"),
            ("HF_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/");
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.digit_grouping, DigitGrouping::Standard);
        assert_eq!(config.formatter().format_price(1_000_000.0), "$ 1,000,000");
        assert!(!config.color);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unparsable_timeout_is_error() {
        let err =
            Config::from_lookup(lookup_from(&[("HF_REQUEST_TIMEOUT_MS", "soon")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        for value in ["0", " 0 ", "-5"] {
            let err =
                Config::from_lookup(lookup_from(&[("HF_REQUEST_TIMEOUT_MS", value)])).unwrap_err();
            assert!(matches!(err, Error::InvalidConfigValue(_)), "accepted {value:?}");
        }
    }

    #[test]
    fn test_bad_log_format_is_error() {
        let err = Config::from_lookup(lookup_from(&[("HF_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_bad_grouping_is_error() {
        let err = Config::from_lookup(lookup_from(&[("HF_DIGIT_GROUPING", "roman")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli {
            url: Some("http://127.0.0.1:1/".to_string()),
            grouping: Some(DigitGrouping::Standard),
            timeout_ms: Some(10),
            no_color: true,
            ..Cli::default()
        };
        let config = Config::default().with_cli(&cli);
        assert_eq!(config.api_url, "http://127.0.0.1:1/");
        assert_eq!(config.digit_grouping, DigitGrouping::Standard);
        assert_eq!(config.request_timeout, Duration::from_millis(10));
        assert!(!config.color);
    }
}
