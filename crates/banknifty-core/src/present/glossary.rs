use serde::Serialize;

use crate::Trend;

pub const GLOSSARY_TITLE: &str = "What These Metrics Mean";

/// One help-text entry; `details` holds sub-bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub meaning: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl GlossaryEntry {
    fn new(term: &'static str, meaning: &'static str) -> Self {
        Self {
            term,
            meaning,
            details: Vec::new(),
        }
    }
}

pub fn glossary() -> Vec<GlossaryEntry> {
    vec![
        GlossaryEntry::new("Current Price", "Latest trading price."),
        GlossaryEntry::new("52-Week High/Low", "Price range over the past 1 year."),
        GlossaryEntry {
            details: vec![
                format!("{} Near 52-week high", Trend::Up.glyph()),
                format!("{} Near 52-week low", Trend::Down.glyph()),
                format!("{} In-between", Trend::Flat.glyph()),
            ],
            ..GlossaryEntry::new("Trend", "Position of the current price in its 52-week range.")
        },
        GlossaryEntry::new("ROE (%)", "Return on Equity, a measure of efficiency."),
        GlossaryEntry::new("P/E Ratio", "Lower means potentially undervalued."),
        GlossaryEntry::new(
            "Market Cap (Cr)",
            "Market capitalization in crores (1 crore = 10,000,000).",
        ),
    ]
}
