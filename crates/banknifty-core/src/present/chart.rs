use serde::Serialize;

use crate::error::RenderError;
use crate::{DisplayRecord, ResultTable};

/// Named bar colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartColor {
    DodgerBlue,
    LimeGreen,
    Tomato,
}

impl ChartColor {
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::DodgerBlue => (30, 144, 255),
            Self::LimeGreen => (50, 205, 50),
            Self::Tomato => (255, 99, 71),
        }
    }

    pub const fn css_name(self) -> &'static str {
        match self {
            Self::DodgerBlue => "dodgerblue",
            Self::LimeGreen => "limegreen",
            Self::Tomato => "tomato",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
    pub color: ChartColor,
}

/// Current / High / Low comparison for one company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartSpec {
    pub title: String,
    pub bars: [ChartBar; 3],
}

impl BarChartSpec {
    pub fn for_record(record: &DisplayRecord) -> Self {
        Self {
            title: format!("{} {}", record.company, record.trend.glyph()),
            bars: [
                ChartBar {
                    label: "Current",
                    value: record.current_price,
                    color: ChartColor::DodgerBlue,
                },
                ChartBar {
                    label: "High",
                    value: record.high_52,
                    color: ChartColor::LimeGreen,
                },
                ChartBar {
                    label: "Low",
                    value: record.low_52,
                    color: ChartColor::Tomato,
                },
            ],
        }
    }

    /// Rejects charts a renderer cannot scale.
    pub fn validate(&self) -> Result<(), RenderError> {
        match self.bars.iter().find(|bar| !bar.value.is_finite()) {
            Some(bar) => Err(RenderError::NonFiniteBar {
                title: self.title.clone(),
                label: bar.label,
            }),
            None => Ok(()),
        }
    }

    /// Largest bar, never below zero.
    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|bar| bar.value)
            .fold(0.0_f64, f64::max)
    }
}

/// One chart per row, in table order.
pub fn charts_for(table: &ResultTable) -> Vec<BarChartSpec> {
    table.iter().map(BarChartSpec::for_record).collect()
}
