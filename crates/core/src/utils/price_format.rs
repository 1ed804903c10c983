//! Display formatting for prices and percentages.
//!
//! Amounts are rounded to at most two fractional digits (half-to-even),
//! trailing fractional zeros are dropped and the integer part is grouped
//! according to a [`DigitGrouping`]. The default grouping is the Indian
//! convention (`10,00,000`).

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY_SYMBOL, DISPLAY_DECIMAL_PRECISION, GROUP_SEPARATOR, PERCENT_DECIMAL_PRECISION,
};
use crate::errors::Error;

/// Digit grouping convention for the integer part of an amount.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// Last three digits, then groups of two: `12,34,567`
    #[default]
    Indian,
    /// Groups of three: `1,234,567`
    Standard,
}

impl DigitGrouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indian => "indian",
            Self::Standard => "standard",
        }
    }

    /// Inserts separators into a string of ASCII digits.
    fn group(&self, digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }
        let (head, tail) = digits.split_at(digits.len() - 3);
        let step = match self {
            Self::Indian => 2,
            Self::Standard => 3,
        };

        let mut groups = Vec::with_capacity(head.len() / step + 2);
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(step);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        groups.push(tail);
        groups.join(GROUP_SEPARATOR)
    }
}

impl fmt::Display for DigitGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigitGrouping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indian" | "in" | "lakh" => Ok(Self::Indian),
            "standard" | "international" | "thousands" => Ok(Self::Standard),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown digit grouping '{}'",
                other
            ))),
        }
    }
}

/// Formats amounts with a currency glyph and a digit grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    symbol: String,
    grouping: DigitGrouping,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL, DigitGrouping::default())
    }
}

impl PriceFormatter {
    pub fn new(symbol: impl Into<String>, grouping: DigitGrouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    /// Grouped amount without the currency glyph, e.g. `1,00,000.5`.
    ///
    /// Non-finite values are rendered with `f64`'s own `Display`.
    pub fn format_amount(&self, value: f64) -> String {
        let Some(decimal) = Decimal::from_f64(value) else {
            return self.format_beyond_decimal(value);
        };
        let rounded = decimal
            .round_dp_with_strategy(
                DISPLAY_DECIMAL_PRECISION,
                RoundingStrategy::MidpointNearestEven,
            )
            .normalize();

        let text = rounded.abs().to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };

        let mut out = String::with_capacity(text.len() + 8);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(&self.grouping.group(int_part));
        if let Some(frac_part) = frac_part {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }

    /// Magnitudes past `Decimal::MAX` have no fractional digits worth keeping,
    /// so only the integer part is grouped.
    fn format_beyond_decimal(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let digits = format!("{:.0}", value.abs());
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}", sign, self.grouping.group(&digits))
    }

    /// Amount prefixed with the currency glyph, e.g. `₹ 200.5`.
    ///
    /// The sign is not special-cased: `-200.5` renders as `₹ -200.5`.
    pub fn format_price(&self, value: f64) -> String {
        format!("{} {}", self.symbol, self.format_amount(value))
    }

    /// Like [`format_price`](Self::format_price) but with the minus sign in
    /// front of the glyph for negative values: `-₹ 200.5`.
    pub fn format_signed_price(&self, value: f64) -> String {
        if value < 0.0 {
            format!("-{}", self.format_price(value.abs()))
        } else {
            self.format_price(value)
        }
    }
}

/// [`PriceFormatter::format_amount`] with the default formatter.
pub fn format_amount(value: f64) -> String {
    PriceFormatter::default().format_amount(value)
}

/// [`PriceFormatter::format_price`] with the default formatter.
pub fn format_price(value: f64) -> String {
    PriceFormatter::default().format_price(value)
}

/// [`PriceFormatter::format_signed_price`] with the default formatter.
pub fn format_signed_price(value: f64) -> String {
    PriceFormatter::default().format_signed_price(value)
}

/// Percentage with two fixed fractional digits and no `%` sign.
pub fn format_percent(value: f64) -> String {
    format!("{:.*}", PERCENT_DECIMAL_PRECISION, value)
}
