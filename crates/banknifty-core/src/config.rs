//! Injected dashboard configuration.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::TickerDirectory;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "\u{20b9}";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "bank_nifty_dashboard.xlsx";
pub const DEFAULT_SHEET_NAME: &str = "BankNifty";

/// Everything a pipeline run needs besides its quote source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardConfig {
    pub directory: TickerDirectory,
    pub currency: CurrencyFormat,
    pub export: ExportSettings,
    pub controls: ControlBounds,
}

impl DashboardConfig {
    pub fn with_directory(mut self, directory: TickerDirectory) -> Self {
        self.directory = directory;
        self
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            directory: TickerDirectory::bank_nifty(),
            currency: CurrencyFormat::default(),
            export: ExportSettings::default(),
            controls: ControlBounds::default(),
        }
    }
}

/// Currency prefix used for price columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub file_name: String,
    pub sheet_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_owned(),
            sheet_name: DEFAULT_SHEET_NAME.to_owned(),
        }
    }
}

/// Integer slider: inclusive range plus the initial position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl SliderBounds {
    pub const fn new(min: u32, max: u32, default: u32) -> Self {
        Self { min, max, default }
    }

    pub fn range(self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    pub fn contains(self, value: u32) -> bool {
        self.range().contains(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBounds {
    pub min_roe: SliderBounds,
    pub max_pe: SliderBounds,
}

impl Default for ControlBounds {
    fn default() -> Self {
        Self {
            min_roe: SliderBounds::new(0, 30, 10),
            max_pe: SliderBounds::new(5, 50, 25),
        }
    }
}
