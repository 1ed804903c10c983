use holdfolio_holdings_api::HoldingRecord;
use serde::{Deserialize, Serialize};

/// One owned stock position.
///
/// Only the raw fields are stored; values, P&L and percentages are derived on
/// demand. Quantities may be zero or negative and prices are not validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub quantity: i64,
    /// Last traded price
    pub ltp: f64,
    /// Cost basis per share
    pub avg_price: f64,
    /// Previous session's closing price
    pub close: f64,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, quantity: i64, ltp: f64, avg_price: f64, close: f64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            ltp,
            avg_price,
            close,
        }
    }

    /// `quantity × ltp`
    pub fn current_value(&self) -> f64 {
        self.quantity as f64 * self.ltp
    }

    /// `quantity × avg_price`
    pub fn investment_value(&self) -> f64 {
        self.quantity as f64 * self.avg_price
    }

    pub fn pnl(&self) -> f64 {
        self.current_value() - self.investment_value()
    }

    /// P&L relative to the investment, in percent. Zero when nothing was invested.
    pub fn pnl_percent(&self) -> f64 {
        let investment = self.investment_value();
        if investment == 0.0 {
            return 0.0;
        }
        self.pnl() / investment * 100.0
    }

    /// `(close − ltp) × quantity`, this holding's share of today's P&L.
    pub fn todays_pnl(&self) -> f64 {
        (self.close - self.ltp) * self.quantity as f64
    }
}

impl From<HoldingRecord> for Holding {
    fn from(record: HoldingRecord) -> Self {
        Self {
            symbol: record.symbol,
            quantity: record.quantity,
            ltp: record.ltp,
            avg_price: record.avg_price,
            close: record.close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_derived_values() {
        let holding = Holding::new("MAHABANK", 990, 38.05, 35.0, 40.0);
        assert!(approx(holding.current_value(), 37669.5));
        assert!(approx(holding.investment_value(), 34650.0));
        assert!(approx(holding.pnl(), 3019.5));
        assert!(approx(holding.pnl_percent(), 3019.5 / 34650.0 * 100.0));
        assert!(approx(holding.todays_pnl(), (40.0 - 38.05) * 990.0));
    }

    #[test]
    fn test_pnl_percent_zero_investment() {
        let holding = Holding::new("FREE", 10, 100.0, 0.0, 95.0);
        assert_eq!(holding.investment_value(), 0.0);
        assert_eq!(holding.pnl_percent(), 0.0);

        let empty = Holding::new("NONE", 0, 100.0, 90.0, 95.0);
        assert_eq!(empty.pnl_percent(), 0.0);
        assert!(!empty.pnl_percent().is_nan());
    }

    #[test]
    fn test_negative_quantity_passes_through() {
        let short = Holding::new("SHORT", -5, 200.0, 180.0, 210.0);
        assert_eq!(short.current_value(), -1000.0);
        assert_eq!(short.investment_value(), -900.0);
        assert_eq!(short.pnl(), -100.0);
        assert_eq!(short.todays_pnl(), -50.0);
    }

    #[test]
    fn test_from_record() {
        let record = HoldingRecord {
            symbol: "ICICI".to_string(),
            quantity: 100,
            ltp: 118.25,
            avg_price: 110.0,
            close: 105.0,
        };
        let holding = Holding::from(record);
        assert_eq!(holding, Holding::new("ICICI", 100, 118.25, 110.0, 105.0));
    }

    #[test]
    fn test_serializes_camel_case() {
        let holding = Holding::new("TCS", 1, 10.0, 9.0, 11.0);
        let json = serde_json::to_value(&holding).unwrap();
        assert_eq!(json["avgPrice"], 9.0);
        assert_eq!(json["ltp"], 10.0);
    }
}
