use serde::{Deserialize, Serialize};

use crate::{Symbol, UtcDateTime};

/// Typed provider response for one symbol.
///
/// Every field is optional: the provider may omit any of them. Non-finite
/// values are dropped at construction so `Some` always holds a real number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub current_price: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub return_on_equity: Option<f64>,
}

impl QuoteSnapshot {
    pub fn new(
        current_price: Option<f64>,
        fifty_two_week_high: Option<f64>,
        fifty_two_week_low: Option<f64>,
        market_cap: Option<f64>,
        trailing_pe: Option<f64>,
        return_on_equity: Option<f64>,
    ) -> Self {
        Self {
            current_price: finite(current_price),
            fifty_two_week_high: finite(fifty_two_week_high),
            fifty_two_week_low: finite(fifty_two_week_low),
            market_cap: finite(market_cap),
            trailing_pe: finite(trailing_pe),
            return_on_equity: finite(return_on_equity),
        }
    }
}

/// Per-symbol quote with documented defaults applied.
///
/// Missing numeric fields are `0.0`; a missing P/E stays `None` because a
/// zero P/E is not the same thing as "no data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    pub symbol: Symbol,
    pub current_price: f64,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_low: f64,
    pub market_cap: f64,
    pub trailing_pe: Option<f64>,
    pub return_on_equity: f64,
    pub as_of: UtcDateTime,
}

impl RawQuote {
    pub fn from_snapshot(symbol: Symbol, snapshot: QuoteSnapshot, as_of: UtcDateTime) -> Self {
        Self {
            symbol,
            current_price: snapshot.current_price.unwrap_or(0.0),
            fifty_two_week_high: snapshot.fifty_two_week_high.unwrap_or(0.0),
            fifty_two_week_low: snapshot.fifty_two_week_low.unwrap_or(0.0),
            market_cap: snapshot.market_cap.unwrap_or(0.0),
            trailing_pe: snapshot.trailing_pe,
            return_on_equity: snapshot.return_on_equity.unwrap_or(0.0),
            as_of,
        }
    }

    /// Substitute used when the provider had nothing for `symbol`.
    pub fn unavailable(symbol: Symbol, as_of: UtcDateTime) -> Self {
        Self::from_snapshot(symbol, QuoteSnapshot::default(), as_of)
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol() -> Symbol {
        Symbol::parse("SBIN.NS").expect("valid symbol")
    }

    #[test]
    fn missing_numeric_fields_default_to_zero_but_pe_stays_absent() {
        let snapshot = QuoteSnapshot::new(Some(812.5), None, None, None, None, None);
        let quote = RawQuote::from_snapshot(symbol(), snapshot, UtcDateTime::now());

        assert_eq!(quote.current_price, 812.5);
        assert_eq!(quote.fifty_two_week_high, 0.0);
        assert_eq!(quote.market_cap, 0.0);
        assert_eq!(quote.return_on_equity, 0.0);
        assert_eq!(quote.trailing_pe, None);
    }

    #[test]
    fn non_finite_provider_values_are_treated_as_absent() {
        let snapshot = QuoteSnapshot::new(
            Some(f64::NAN),
            Some(900.0),
            Some(600.0),
            Some(f64::INFINITY),
            Some(f64::INFINITY),
            Some(0.12),
        );

        assert_eq!(snapshot.current_price, None);
        assert_eq!(snapshot.market_cap, None);
        assert_eq!(snapshot.trailing_pe, None);
        assert_eq!(snapshot.fifty_two_week_high, Some(900.0));
    }

    #[test]
    fn unavailable_quote_is_all_zero_with_absent_pe() {
        let quote = RawQuote::unavailable(symbol(), UtcDateTime::now());
        assert_eq!(quote.current_price, 0.0);
        assert_eq!(quote.fifty_two_week_low, 0.0);
        assert_eq!(quote.trailing_pe, None);
    }
}
