//! Table assembly.

use crate::fetcher::FetchedQuote;
use crate::normalize::normalize;
use crate::ResultTable;

/// Normalize fetched quotes into one row each, keeping fetch order.
///
/// No deduplication and no sorting.
pub fn assemble(quotes: &[FetchedQuote]) -> ResultTable {
    quotes
        .iter()
        .map(|fetched| normalize(&fetched.company, &fetched.quote))
        .collect()
}
