use serde::{Deserialize, Serialize};

/// Top-level envelope returned by the holdings endpoint.
///
/// ```json
/// { "data": { "userHolding": [ { "symbol": "ASHOKLEY", "quantity": 3, "ltp": 119.1, "avgPrice": 115, "close": 120 } ] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldingsResponse {
    #[serde(default)]
    pub data: Option<HoldingsData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsData {
    #[serde(default, alias = "holdings")]
    pub user_holding: Option<Vec<HoldingRecord>>,
}

/// One position as sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    pub symbol: String,
    pub quantity: i64,
    /// Last traded price
    pub ltp: f64,
    pub avg_price: f64,
    /// Previous session's closing price
    pub close: f64,
}

impl HoldingsResponse {
    pub fn new(records: Vec<HoldingRecord>) -> Self {
        Self {
            data: Some(HoldingsData {
                user_holding: Some(records),
            }),
        }
    }

    /// Number of records, treating a null envelope or list as empty.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn records(&self) -> &[HoldingRecord] {
        self.data
            .as_ref()
            .and_then(|d| d.user_holding.as_deref())
            .unwrap_or_default()
    }

    pub fn into_holdings(self) -> Vec<HoldingRecord> {
        self.data
            .and_then(|d| d.user_holding)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_user_holding_payload() {
        let json = r#"{
            "data": {
                "userHolding": [
                    { "symbol": "MAHABANK", "quantity": 990, "ltp": 38.05, "avgPrice": 35, "close": 40 }
                ]
            }
        }"#;
        let response: HoldingsResponse = serde_json::from_str(json).unwrap();
        let records = response.into_holdings();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].symbol, "MAHABANK");
        assert_eq!(records[0].quantity, 990);
        assert_eq!(records[0].ltp, 38.05);
        assert_eq!(records[0].avg_price, 35.0);
        assert_eq!(records[0].close, 40.0);
    }

    #[test]
    fn test_accepts_holdings_field_name() {
        let json = r#"{ "data": { "holdings": [
            { "symbol": "ICICI", "quantity": 100, "ltp": 118.25, "avgPrice": 110, "close": 105 }
        ] } }"#;
        let response: HoldingsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.len(), 1);
        assert_eq!(response.records()[0].symbol, "ICICI");
    }

    #[test]
    fn test_null_data_is_empty() {
        let response: HoldingsResponse = serde_json::from_str(r#"{ "data": null }"#).unwrap();
        assert!(response.is_empty());
        assert!(response.into_holdings().is_empty());
    }

    #[test]
    fn test_missing_data_is_empty() {
        let response: HoldingsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_null_list_is_empty() {
        let response: HoldingsResponse =
            serde_json::from_str(r#"{ "data": { "userHolding": null } }"#).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_zero_and_negative_quantities_pass_through() {
        let json = r#"{ "data": { "userHolding": [
            { "symbol": "ZERO", "quantity": 0, "ltp": 10, "avgPrice": 10, "close": 10 },
            { "symbol": "SHORT", "quantity": -5, "ltp": 10, "avgPrice": 12, "close": 9 }
        ] } }"#;
        let records = serde_json::from_str::<HoldingsResponse>(json)
            .unwrap()
            .into_holdings();
        assert_eq!(records[0].quantity, 0);
        assert_eq!(records[1].quantity, -5);
    }

    #[test]
    fn test_missing_field_fails() {
        let json = r#"{ "data": { "userHolding": [ { "symbol": "X", "quantity": 1 } ] } }"#;
        assert!(serde_json::from_str::<HoldingsResponse>(json).is_err());
    }
}
