//! Property tests for the row normalizer, filter and export.
//!
//! 1. Up dominance: a price above 95% of the high is Up whatever the low
//! 2. Degenerate quotes: an all-zero quote is Up
//! 3. Filter idempotence and soundness
//! 4. Export keeps the row count

use std::io::Cursor;

use banknifty_core::normalize::{classify_trend, normalize};
use banknifty_core::{
    filter, workbook_bytes, DisplayRecord, FilterCriteria, RawQuote, ResultTable, Symbol, Trend,
    UtcDateTime,
};
use calamine::{open_workbook_from_rs, Reader, Xlsx};
use proptest::prelude::*;

const COMPANIES: [&str; 4] = ["HDFC Bank", "Axis Bank", "Canara Bank", "Yes Bank"];

// ── Strategies ───────────────────────────────────────────────────────

fn arb_price() -> impl Strategy<Value = f64> {
    (0.0..5_000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_record() -> impl Strategy<Value = DisplayRecord> {
    (
        prop::sample::select(COMPANIES.to_vec()),
        arb_price(),
        arb_price(),
        arb_price(),
        prop::option::of(1.0..60.0_f64),
        0.0..35.0_f64,
    )
        .prop_map(|(company, current, high, low, pe, roe)| DisplayRecord {
            company: company.to_owned(),
            current_price: current,
            high_52: high,
            low_52: low,
            trend: classify_trend(current, high, low),
            market_cap_cr: current * 10.0,
            pe,
            roe_percent: roe,
        })
}

fn arb_table() -> impl Strategy<Value = ResultTable> {
    prop::collection::vec(arb_record(), 0..12).prop_map(ResultTable::new)
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::sample::subsequence(COMPANIES.to_vec(), 0..=COMPANIES.len()),
        0_u32..=30,
        5_u32..=50,
    )
        .prop_map(|(companies, min_roe, max_pe)| {
            FilterCriteria::new(companies, f64::from(min_roe), f64::from(max_pe))
        })
}

// ── 1. Up dominance ──────────────────────────────────────────────────

proptest! {
    /// Once the price clears 95% of the high, the low never matters.
    #[test]
    fn price_near_high_is_always_up(high in 1.0..10_000.0_f64, ratio in 0.951..2.0_f64, low in 0.0..20_000.0_f64) {
        let current = high * ratio;
        prop_assume!(current > high * 0.95);
        prop_assert_eq!(classify_trend(current, high, low), Trend::Up);
    }

    /// Below the Up threshold and the Down threshold the trend is Down.
    #[test]
    fn price_near_low_is_down(low in 100.0..1_000.0_f64, high_ratio in 1.2..3.0_f64, ratio in 0.5..1.049_f64) {
        let high = low * high_ratio;
        let current = low * ratio;
        prop_assume!(current <= high * 0.95 && current < low * 1.05);
        prop_assert_eq!(classify_trend(current, high, low), Trend::Down);
    }
}

// ── 2. Degenerate quotes ─────────────────────────────────────────────

#[test]
fn all_zero_quote_normalizes_to_up() {
    let quote = RawQuote::unavailable(
        Symbol::parse("PNB.NS").expect("valid symbol"),
        UtcDateTime::now(),
    );

    let record = normalize("Punjab National Bank", &quote);
    assert_eq!(record.trend, Trend::Up);
    assert_eq!(record.pe, None);
}

// ── 3. Filter ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn filter_is_idempotent(table in arb_table(), criteria in arb_criteria()) {
        let once = filter::apply(&table, &criteria);
        let twice = filter::apply(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_keeps_exactly_the_matching_rows_in_order(table in arb_table(), criteria in arb_criteria()) {
        let kept = filter::apply(&table, &criteria);
        let expected = table
            .iter()
            .filter(|row| {
                criteria.is_selected(&row.company)
                    && row.roe_percent >= criteria.min_roe
                    && row.pe.map_or(true, |pe| pe <= criteria.max_pe)
            })
            .cloned()
            .collect::<ResultTable>();
        prop_assert_eq!(kept, expected);
    }
}

// ── 4. Export ────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn export_keeps_row_count_and_columns(table in arb_table()) {
        let bytes = workbook_bytes(&table, "BankNifty").expect("export succeeds");
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).expect("valid xlsx");
        let range = workbook.worksheet_range("BankNifty").expect("sheet exists");

        prop_assert_eq!(range.height(), table.len() + 1);
        prop_assert_eq!(range.width(), 8);
    }
}
