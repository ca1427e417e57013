//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated exchange ticker |
//! | [`TickerDirectory`] | Ordered company -> ticker mapping |
//! | [`QuoteSnapshot`] | Typed provider response, every field optional |
//! | [`RawQuote`] | Snapshot with documented defaults applied |
//! | [`DisplayRecord`] | One normalized table row |
//! | [`Trend`] | Up / Down / Flat indicator |
//! | [`FilterCriteria`] | Company allow-list plus ROE and P/E bounds |
//! | [`ResultTable`] | Ordered rows that are presented and exported |
//! | [`UtcDateTime`] | UTC timestamp |

mod criteria;
mod directory;
mod quote;
mod record;
mod symbol;
mod timestamp;

pub use criteria::FilterCriteria;
pub use directory::{DirectoryEntry, TickerDirectory};
pub use quote::{QuoteSnapshot, RawQuote};
pub use record::{DisplayRecord, ResultTable, Trend};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
