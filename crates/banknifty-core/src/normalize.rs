//! Raw quote -> display record.

use crate::{DisplayRecord, RawQuote, Trend};

/// Current price above this share of the 52-week high reads as "Up".
pub const NEAR_HIGH_RATIO: f64 = 0.95;
/// Current price below this multiple of the 52-week low reads as "Down".
pub const NEAR_LOW_RATIO: f64 = 1.05;
/// One crore.
pub const CRORE: f64 = 10_000_000.0;

/// Classify the current price against its 52-week range.
///
/// The Up test runs first, so it wins whenever both thresholds hold. An
/// all-zero quote (the substitute for an unavailable symbol) is a degenerate
/// range and also reads as Up.
pub fn classify_trend(current: f64, high: f64, low: f64) -> Trend {
    if is_degenerate_zero(current, high, low) || current > high * NEAR_HIGH_RATIO {
        Trend::Up
    } else if current < low * NEAR_LOW_RATIO {
        Trend::Down
    } else {
        Trend::Flat
    }
}

fn is_degenerate_zero(current: f64, high: f64, low: f64) -> bool {
    current == 0.0 && high == 0.0 && low == 0.0
}

pub fn normalize(company: &str, quote: &RawQuote) -> DisplayRecord {
    DisplayRecord {
        company: company.to_owned(),
        current_price: quote.current_price,
        high_52: quote.fifty_two_week_high,
        low_52: quote.fifty_two_week_low,
        trend: classify_trend(
            quote.current_price,
            quote.fifty_two_week_high,
            quote.fifty_two_week_low,
        ),
        market_cap_cr: round2(quote.market_cap / CRORE),
        pe: quote.trailing_pe,
        roe_percent: round2(quote.return_on_equity * 100.0),
    }
}

/// Round to two decimal places from the exact binary value, ties to even.
///
/// Scaling by 100 first would round `45.824999...` up to `45.83`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
