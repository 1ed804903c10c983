pub mod price_format;

pub use price_format::{
    format_amount, format_percent, format_price, format_signed_price, DigitGrouping,
    PriceFormatter,
};
