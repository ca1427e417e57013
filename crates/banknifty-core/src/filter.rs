//! Display filters.

use crate::{DisplayRecord, FilterCriteria, ResultTable};

/// Whether `record` passes `criteria`.
///
/// A record without a P/E always passes the max-P/E bound: there is
/// nothing to compare.
pub fn matches(record: &DisplayRecord, criteria: &FilterCriteria) -> bool {
    criteria.is_selected(&record.company)
        && record.roe_percent >= criteria.min_roe
        && record.pe.map_or(true, |pe| pe <= criteria.max_pe)
}

/// Keep the records that pass `criteria`, preserving order.
pub fn apply(table: &ResultTable, criteria: &FilterCriteria) -> ResultTable {
    table
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}
