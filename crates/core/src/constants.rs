/// Currency glyph prefixed to formatted prices
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Maximum fractional digits shown for prices
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Fixed fractional digits shown for percentages
pub const PERCENT_DECIMAL_PRECISION: usize = 2;

/// Separator inserted between digit groups
pub const GROUP_SEPARATOR: &str = ",";
