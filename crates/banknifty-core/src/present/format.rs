use crate::config::CurrencyFormat;

/// Text shown for an absent P/E.
pub const ABSENT_VALUE: &str = "n/a";

/// `₹1500.00` style price.
pub fn currency(value: f64, format: &CurrencyFormat) -> String {
    format!("{}{value:.2}", format.symbol)
}

pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

pub fn optional_fixed2(value: Option<f64>) -> String {
    value.map_or_else(|| ABSENT_VALUE.to_owned(), fixed2)
}
