//! Quote source contract and its error type.
//!
//! A [`QuoteSource`] answers one symbol at a time with a typed
//! [`QuoteSnapshot`]. The [`QuoteFetcher`](crate::QuoteFetcher) drives it
//! and decides what to do with failures.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::{QuoteSnapshot, Symbol};

/// Identifier of a quote source, used in logs and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Yahoo,
    Fixture,
}

impl SourceId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yahoo => "yahoo",
            Self::Fixture => "fixture",
        }
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Provider returned nothing or the transport failed.
    DataUnavailable,
}

/// Structured source error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::DataUnavailable,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::DataUnavailable => "source.data_unavailable",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Market-data provider contract.
///
/// Implementations must be `Send + Sync`; the fetcher holds them behind an
/// `Arc` and calls them one symbol at a time.
pub trait QuoteSource: Send + Sync {
    fn id(&self) -> SourceId;

    /// Fetch the current snapshot for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] of kind
    /// [`DataUnavailable`](SourceErrorKind::DataUnavailable) when the
    /// provider has no data for the symbol or cannot be reached.
    fn snapshot<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteSnapshot, SourceError>> + Send + 'a>>;
}
