use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::data_source::{QuoteSource, SourceError, SourceId};
use crate::{QuoteSnapshot, Symbol};

/// Offline quote source.
///
/// Answers from explicitly registered snapshots and failures. In synthetic
/// mode any unregistered symbol gets deterministic data derived from its
/// ticker text, which is what `--mock` runs use.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    snapshots: HashMap<Symbol, QuoteSnapshot>,
    failures: HashMap<Symbol, String>,
    synthetic: bool,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn synthetic() -> Self {
        Self {
            synthetic: true,
            ..Self::default()
        }
    }

    pub fn with_snapshot(mut self, symbol: Symbol, snapshot: QuoteSnapshot) -> Self {
        self.failures.remove(&symbol);
        self.snapshots.insert(symbol, snapshot);
        self
    }

    pub fn with_failure(mut self, symbol: Symbol, message: impl Into<String>) -> Self {
        self.snapshots.remove(&symbol);
        self.failures.insert(symbol, message.into());
        self
    }

    fn lookup(&self, symbol: &Symbol) -> Result<QuoteSnapshot, SourceError> {
        if let Some(message) = self.failures.get(symbol) {
            return Err(SourceError::data_unavailable(message.clone()));
        }
        if let Some(snapshot) = self.snapshots.get(symbol) {
            return Ok(*snapshot);
        }
        if self.synthetic {
            return Ok(synthetic_snapshot(symbol));
        }
        Err(SourceError::data_unavailable(format!(
            "no fixture registered for {symbol}"
        )))
    }
}

impl QuoteSource for FixtureSource {
    fn id(&self) -> SourceId {
        SourceId::Fixture
    }

    fn snapshot<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteSnapshot, SourceError>> + Send + 'a>> {
        let result = self.lookup(symbol);
        Box::pin(async move { result })
    }
}

fn synthetic_snapshot(symbol: &Symbol) -> QuoteSnapshot {
    let seed = symbol_seed(symbol);
    let low = 60.0 + (seed % 1_500) as f64;
    let high = low * (1.25 + (seed % 40) as f64 / 100.0);
    // Spread positions across the range so all three trends show up.
    let position = (seed % 11) as f64 / 10.0;
    let current = low + (high - low) * position;
    let shares = 1.0e9 + (seed % 7_000) as f64 * 1.0e6;
    // Roughly one symbol in five reports no trailing P/E.
    let trailing_pe = (seed % 5 != 0).then(|| 6.0 + (seed % 260) as f64 / 10.0);
    let return_on_equity = 0.04 + (seed % 19) as f64 / 100.0;

    QuoteSnapshot::new(
        Some(round_paise(current)),
        Some(round_paise(high)),
        Some(round_paise(low)),
        Some(current * shares),
        trailing_pe,
        Some(return_on_equity),
    )
}

fn round_paise(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}
