use serde::{Deserialize, Serialize};

/// Portfolio-level aggregates over a list of holdings.
///
/// Derived afresh from the full holdings list after every successful fetch.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Σ ltp × quantity
    pub current_value: f64,
    /// Σ avg_price × quantity
    pub total_investment: f64,
    /// current_value − total_investment
    pub total_pnl: f64,
    /// Σ (close − ltp) × quantity
    pub todays_pnl: f64,
}

impl PortfolioSummary {
    pub fn new(current_value: f64, total_investment: f64, total_pnl: f64, todays_pnl: f64) -> Self {
        Self {
            current_value,
            total_investment,
            total_pnl,
            todays_pnl,
        }
    }

    /// Total P&L relative to the investment, in percent.
    ///
    /// Returns 0 when `total_investment` is zero.
    pub fn total_pnl_percent(&self) -> f64 {
        if self.total_investment == 0.0 {
            return 0.0;
        }
        self.total_pnl / self.total_investment * 100.0
    }
}
