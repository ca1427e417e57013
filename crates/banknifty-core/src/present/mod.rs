//! Presentation model.
//!
//! Pure data for the host to draw: a [`StyledTable`] with per-cell emphasis
//! and one [`BarChartSpec`] per row. Drawing goes through the
//! [`TableRenderer`] and [`ChartRenderer`] seams.

mod chart;
mod format;
mod glossary;
mod styled_table;

pub use chart::{charts_for, BarChartSpec, ChartBar, ChartColor};
pub use format::{currency, fixed2, optional_fixed2, ABSENT_VALUE};
pub use glossary::{glossary, GlossaryEntry, GLOSSARY_TITLE};
pub use styled_table::{Column, Emphasis, StyledCell, StyledTable};

use crate::error::RenderError;

/// Draws a styled table.
pub trait TableRenderer {
    fn render_table(&mut self, table: &StyledTable) -> Result<(), RenderError>;
}

/// Draws a single bar chart.
pub trait ChartRenderer {
    fn render_chart(&mut self, chart: &BarChartSpec) -> Result<(), RenderError>;
}

/// Validate and draw every chart in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`RenderError`] raised by validation or by `renderer`.
pub fn render_charts<R>(renderer: &mut R, charts: &[BarChartSpec]) -> Result<(), RenderError>
where
    R: ChartRenderer + ?Sized,
{
    for chart in charts {
        chart.validate()?;
        renderer.render_chart(chart)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisplayRecord, ResultTable, Trend};

    #[derive(Default)]
    struct RecordingRenderer {
        titles: Vec<String>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render_chart(&mut self, chart: &BarChartSpec) -> Result<(), RenderError> {
            self.titles.push(chart.title.clone());
            Ok(())
        }
    }

    fn record(company: &str, current_price: f64) -> DisplayRecord {
        DisplayRecord {
            company: company.to_owned(),
            current_price,
            high_52: 120.0,
            low_52: 80.0,
            trend: Trend::Flat,
            market_cap_cr: 10.0,
            pe: None,
            roe_percent: 12.0,
        }
    }

    #[test]
    fn empty_table_renders_no_charts() {
        let mut renderer = RecordingRenderer::default();
        render_charts(&mut renderer, &charts_for(&ResultTable::default()))
            .expect("nothing to draw");
        assert!(renderer.titles.is_empty());
    }

    #[test]
    fn non_finite_bar_aborts_before_later_charts() {
        let table = ResultTable::new(vec![
            record("Axis Bank", 100.0),
            record("Yes Bank", f64::INFINITY),
            record("SBI", 90.0),
        ]);
        let mut renderer = RecordingRenderer::default();

        let error = render_charts(&mut renderer, &charts_for(&table)).expect_err("infinite bar");
        assert!(matches!(error, RenderError::NonFiniteBar { label: "Current", .. }));
        assert_eq!(renderer.titles, vec![format!("Axis Bank {}", Trend::Flat.glyph())]);
    }
}
