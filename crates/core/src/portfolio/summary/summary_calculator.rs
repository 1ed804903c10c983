use log::debug;

use crate::holdings::Holding;
use crate::portfolio::summary::PortfolioSummary;

/// Aggregates a list of holdings into a [`PortfolioSummary`].
///
/// Single pass, no validation, no failure modes. An empty list yields an
/// all-zero summary whose percentage is also zero.
pub fn calculate_summary(holdings: &[Holding]) -> PortfolioSummary {
    let (current_value, total_investment, todays_pnl) = holdings.iter().fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(current, invested, today), h| {
            let qty = h.quantity as f64;
            (
                current + h.ltp * qty,
                invested + h.avg_price * qty,
                today + (h.close - h.ltp) * qty,
            )
        },
    );

    debug!(
        "Summarised {} holdings: current={} invested={}",
        holdings.len(),
        current_value,
        total_investment
    );

    PortfolioSummary {
        current_value,
        total_investment,
        total_pnl: current_value - total_investment,
        todays_pnl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_empty_holdings() {
        let summary = calculate_summary(&[]);
        assert_eq!(summary, PortfolioSummary::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(summary.total_pnl_percent(), 0.0);
    }

    #[test]
    fn test_two_holdings() {
        let holdings = vec![
            Holding::new("TEST1", 10, 100.0, 90.0, 95.0),
            Holding::new("TEST2", 5, 200.0, 180.0, 210.0),
        ];
        let summary = calculate_summary(&holdings);
        assert_eq!(summary.current_value, 2000.0);
        assert_eq!(summary.total_investment, 1800.0);
        assert_eq!(summary.total_pnl, 200.0);
        assert_eq!(summary.todays_pnl, 0.0);
        assert!(approx(summary.total_pnl_percent(), 200.0 / 1800.0 * 100.0));
    }

    #[test]
    fn test_single_holding() {
        let holdings = vec![Holding::new("MAHABANK", 990, 38.05, 35.0, 40.0)];
        let summary = calculate_summary(&holdings);
        assert!(approx(summary.current_value, 37669.5));
        assert_eq!(summary.total_investment, 34650.0);
        assert!(approx(summary.total_pnl, 3019.5));
        assert!(approx(summary.todays_pnl, 1930.5));
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let holdings = vec![
            Holding::new("A", 10, 100.0, 90.0, 95.0),
            Holding::new("ZERO", 0, 5000.0, 1.0, 9000.0),
        ];
        let summary = calculate_summary(&holdings);
        assert_eq!(summary, calculate_summary(&holdings[..1]));
    }

    #[test]
    fn test_loss_making_portfolio() {
        let holdings = vec![Holding::new("IDEA", 100, 8.0, 10.0, 9.0)];
        let summary = calculate_summary(&holdings);
        assert_eq!(summary.total_pnl, -200.0);
        assert_eq!(summary.todays_pnl, 100.0);
        assert_eq!(summary.total_pnl_percent(), -20.0);
    }

    #[test]
    fn test_zero_investment_percentage() {
        let holdings = vec![Holding::new("GIFT", 10, 50.0, 0.0, 50.0)];
        let summary = calculate_summary(&holdings);
        assert_eq!(summary.total_investment, 0.0);
        assert_eq!(summary.total_pnl, 500.0);
        assert_eq!(summary.total_pnl_percent(), 0.0);
    }
}
