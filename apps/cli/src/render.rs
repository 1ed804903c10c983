//! Text and JSON rendering of a [`PortfolioSnapshot`].
//!
//! The text layout mirrors a holdings screen: one two-line row per holding,
//! followed by the summary panel. The panel is collapsed by default and only
//! shows total P&L; expanded it also lists current value, total investment
//! and today's P&L above the header line.

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;
use holdfolio_core::utils::{format_percent, PriceFormatter};
use holdfolio_core::{Holding, PortfolioSnapshot, PortfolioSummary};
use serde::Serialize;

const ROW_WIDTH: usize = 52;

pub struct Renderer {
    formatter: PriceFormatter,
    color: bool,
}

impl Renderer {
    pub fn new(formatter: PriceFormatter, color: bool) -> Self {
        Self { formatter, color }
    }

    /// Green for gains (including zero), red for losses.
    fn tone(&self, text: String, gain: bool) -> String {
        if !self.color {
            return text;
        }
        if gain {
            text.green().to_string()
        } else {
            text.red().to_string()
        }
    }

    /// Left and right aligned on one line. Padding is measured on the
    /// unstyled text since escape codes take no columns.
    fn line(&self, left: &str, right_plain: &str, right: String) -> String {
        let used = left.chars().count() + right_plain.chars().count();
        let pad = ROW_WIDTH.saturating_sub(used).max(1);
        format!("{}{}{}", left, " ".repeat(pad), right)
    }

    fn separator() -> String {
        "─".repeat(ROW_WIDTH)
    }

    pub fn holding_row(&self, holding: &Holding) -> String {
        let ltp = format!("LTP: {}", self.formatter.format_price(holding.ltp));
        let quantity = format!("NET QTY: {}", holding.quantity);

        let pnl = holding.pnl();
        let pnl_text = self.formatter.format_signed_price(pnl);
        let pnl_plain = format!("P&L: {}", pnl_text);
        let pnl_styled = format!("P&L: {}", self.tone(pnl_text, pnl >= 0.0));

        format!(
            "{}\n{}",
            self.line(&holding.symbol, &ltp, ltp.clone()),
            self.line(&quantity, &pnl_plain, pnl_styled)
        )
    }

    pub fn holdings_list(&self, holdings: &[Holding]) -> String {
        if holdings.is_empty() {
            return "No holdings".to_string();
        }
        let separator = format!("\n{}\n", Self::separator());
        holdings
            .iter()
            .map(|h| self.holding_row(h))
            .collect::<Vec<_>>()
            .join(&separator)
    }

    fn amount_line(&self, label: &str, value: f64, toned: bool) -> String {
        let text = self.formatter.format_signed_price(value);
        let plain = text.clone();
        let styled = if toned {
            self.tone(text, value >= 0.0)
        } else {
            text
        };
        self.line(label, &plain, styled)
    }

    pub fn summary_panel(&self, summary: &PortfolioSummary, expanded: bool) -> String {
        let mut lines = Vec::new();
        if expanded {
            lines.push(self.amount_line("Current value*", summary.current_value, false));
            lines.push(self.amount_line("Total investment*", summary.total_investment, false));
            lines.push(self.amount_line("Today's Profit & Loss*", summary.todays_pnl, true));
            lines.push(Self::separator());
        }

        let title = format!("Profit & Loss* {}", if expanded { "▼" } else { "▲" });
        let value = format!(
            "{} ({}%)",
            self.formatter.format_signed_price(summary.total_pnl),
            format_percent(summary.total_pnl_percent())
        );
        let styled = self.tone(value.clone(), summary.total_pnl >= 0.0);
        lines.push(self.line(&title, &value, styled));

        lines.join("\n")
    }

    pub fn render(&self, snapshot: &PortfolioSnapshot, expanded: bool) -> String {
        let header = format!(
            "Holdings ({}) as of {}",
            snapshot.holdings.len(),
            snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        format!(
            "{}\n{}\n{}\n{}\n{}",
            header,
            Self::separator(),
            self.holdings_list(&snapshot.holdings),
            Self::separator(),
            self.summary_panel(&snapshot.summary, expanded)
        )
    }
}

/// A holding together with its derived values.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingReport {
    #[serde(flatten)]
    pub holding: Holding,
    pub current_value: f64,
    pub investment_value: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
    pub todays_pnl: f64,
}

impl From<&Holding> for HoldingReport {
    fn from(holding: &Holding) -> Self {
        Self {
            current_value: holding.current_value(),
            investment_value: holding.investment_value(),
            pnl: holding.pnl(),
            pnl_percent: holding.pnl_percent(),
            todays_pnl: holding.todays_pnl(),
            holding: holding.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    #[serde(flatten)]
    pub summary: PortfolioSummary,
    pub total_pnl_percent: f64,
}

/// Machine-readable output for `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    pub holdings: Vec<HoldingReport>,
    pub summary: SummaryReport,
    pub fetched_at: DateTime<Utc>,
}

impl From<&PortfolioSnapshot> for JsonReport {
    fn from(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            holdings: snapshot.holdings.iter().map(HoldingReport::from).collect(),
            summary: SummaryReport {
                summary: snapshot.summary,
                total_pnl_percent: snapshot.summary.total_pnl_percent(),
            },
            fetched_at: snapshot.fetched_at,
        }
    }
}
