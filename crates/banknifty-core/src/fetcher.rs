use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::data_source::{QuoteSource, SourceError, SourceId};
use crate::{RawQuote, Symbol, TickerDirectory, UtcDateTime};

/// Quote fetched for one directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedQuote {
    pub company: String,
    pub quote: RawQuote,
}

/// Directory entry whose quote had to be substituted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unavailable {
    pub company: String,
    pub symbol: Symbol,
    pub code: &'static str,
    pub message: String,
}

impl Unavailable {
    fn new(company: &str, symbol: &Symbol, error: &SourceError) -> Self {
        Self {
            company: company.to_owned(),
            symbol: symbol.clone(),
            code: error.code(),
            message: error.message().to_owned(),
        }
    }

    pub fn warning(&self) -> String {
        format!(
            "{} ({}): data unavailable, showing zero values: {}",
            self.company, self.symbol, self.message
        )
    }
}

/// Outcome of fetching every entry of a directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
    /// One quote per entry, in directory order.
    pub quotes: Vec<FetchedQuote>,
    pub unavailable: Vec<Unavailable>,
}

/// Sequential per-symbol fetcher.
///
/// Issues exactly one request per directory entry and never aborts the
/// batch: a failed symbol is replaced with [`RawQuote::unavailable`].
#[derive(Clone)]
pub struct QuoteFetcher {
    source: Arc<dyn QuoteSource>,
}

impl QuoteFetcher {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    pub fn source_id(&self) -> SourceId {
        self.source.id()
    }

    pub async fn fetch(&self, directory: &TickerDirectory) -> FetchReport {
        let mut report = FetchReport {
            quotes: Vec::with_capacity(directory.len()),
            unavailable: Vec::new(),
        };

        for entry in directory.entries() {
            let as_of = UtcDateTime::now();
            let quote = match self.source.snapshot(&entry.symbol).await {
                Ok(snapshot) => {
                    debug!(company = %entry.company, symbol = %entry.symbol, "quote fetched");
                    RawQuote::from_snapshot(entry.symbol.clone(), snapshot, as_of)
                }
                Err(error) => {
                    warn!(
                        company = %entry.company,
                        symbol = %entry.symbol,
                        source = %self.source.id(),
                        error = %error,
                        "quote unavailable, substituting zero values"
                    );
                    report
                        .unavailable
                        .push(Unavailable::new(&entry.company, &entry.symbol, &error));
                    RawQuote::unavailable(entry.symbol.clone(), as_of)
                }
            };

            report.quotes.push(FetchedQuote {
                company: entry.company.clone(),
                quote,
            });
        }

        report
    }
}
