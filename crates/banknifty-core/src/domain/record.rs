use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Where the current price sits inside its 52-week range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Near the 52-week high.
    Up,
    /// Near the 52-week low.
    Down,
    /// In between.
    Flat,
}

impl Trend {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "\u{2b06}\u{fe0f}",
            Self::Down => "\u{2b07}\u{fe0f}",
            Self::Flat => "\u{2194}\u{fe0f}",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }
}

impl Display for Trend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// One display row, derived from a [`RawQuote`](crate::RawQuote).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub company: String,
    pub current_price: f64,
    pub high_52: f64,
    pub low_52: f64,
    pub trend: Trend,
    pub market_cap_cr: f64,
    pub pe: Option<f64>,
    pub roe_percent: f64,
}

/// Ordered rows that are presented and exported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<DisplayRecord>,
}

impl ResultTable {
    pub fn new(rows: Vec<DisplayRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DisplayRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DisplayRecord> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a DisplayRecord;
    type IntoIter = std::slice::Iter<'a, DisplayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<DisplayRecord> for ResultTable {
    fn from_iter<T: IntoIterator<Item = DisplayRecord>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
