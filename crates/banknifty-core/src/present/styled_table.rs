use serde::Serialize;

use super::format::{currency, fixed2, optional_fixed2};
use crate::config::CurrencyFormat;
use crate::{DisplayRecord, ResultTable};

/// Display columns, in presentation and export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Company,
    CurrentPrice,
    High52,
    Low52,
    Trend,
    MarketCapCr,
    Pe,
    RoePercent,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Self::Company,
        Self::CurrentPrice,
        Self::High52,
        Self::Low52,
        Self::Trend,
        Self::MarketCapCr,
        Self::Pe,
        Self::RoePercent,
    ];

    pub const fn header(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::CurrentPrice => "Current Price",
            Self::High52 => "52-Week High",
            Self::Low52 => "52-Week Low",
            Self::Trend => "Trend",
            Self::MarketCapCr => "Market Cap (Cr)",
            Self::Pe => "P/E Ratio",
            Self::RoePercent => "ROE (%)",
        }
    }

    /// Which extreme of this column is highlighted, if any.
    pub const fn highlight(self) -> Option<Emphasis> {
        match self {
            Self::CurrentPrice | Self::RoePercent => Some(Emphasis::Maximum),
            Self::Pe | Self::Low52 => Some(Emphasis::Minimum),
            _ => None,
        }
    }

    /// Numeric value of this column; `None` for text columns and absent P/E.
    pub fn value(self, record: &DisplayRecord) -> Option<f64> {
        match self {
            Self::Company | Self::Trend => None,
            Self::CurrentPrice => Some(record.current_price),
            Self::High52 => Some(record.high_52),
            Self::Low52 => Some(record.low_52),
            Self::MarketCapCr => Some(record.market_cap_cr),
            Self::Pe => record.pe,
            Self::RoePercent => Some(record.roe_percent),
        }
    }

    fn text(self, record: &DisplayRecord, format: &CurrencyFormat) -> String {
        match self {
            Self::Company => record.company.clone(),
            Self::CurrentPrice => currency(record.current_price, format),
            Self::High52 => currency(record.high_52, format),
            Self::Low52 => currency(record.low_52, format),
            Self::Trend => record.trend.glyph().to_owned(),
            Self::MarketCapCr => fixed2(record.market_cap_cr),
            Self::Pe => optional_fixed2(record.pe),
            Self::RoePercent => fixed2(record.roe_percent),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Column maximum (light green).
    Maximum,
    /// Column minimum (light pink).
    Minimum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledCell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

/// Formatted table with per-cell emphasis.
///
/// Extremes are computed over the rows handed in, so they follow the
/// current filter. Ties are all highlighted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<StyledCell>>,
}

impl StyledTable {
    pub fn from_table(table: &ResultTable, format: &CurrencyFormat) -> Self {
        let extremes = Column::ALL.map(|column| extreme(table, column));

        let rows = table
            .iter()
            .map(|record| {
                Column::ALL
                    .iter()
                    .zip(extremes.iter())
                    .map(|(&column, target)| StyledCell {
                        text: column.text(record, format),
                        emphasis: match (column.value(record), target) {
                            (Some(value), Some((emphasis, target))) if value == *target => {
                                Some(*emphasis)
                            }
                            _ => None,
                        },
                    })
                    .collect()
            })
            .collect();

        Self {
            columns: Column::ALL.to_vec(),
            rows,
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.header())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn extreme(table: &ResultTable, column: Column) -> Option<(Emphasis, f64)> {
    let emphasis = column.highlight()?;
    let values = table.iter().filter_map(|record| column.value(record));
    let target = match emphasis {
        Emphasis::Maximum => values.reduce(f64::max),
        Emphasis::Minimum => values.reduce(f64::min),
    }?;
    Some((emphasis, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Trend;

    fn record(
        company: &str,
        current_price: f64,
        low_52: f64,
        pe: Option<f64>,
        roe_percent: f64,
    ) -> DisplayRecord {
        DisplayRecord {
            company: company.to_owned(),
            current_price,
            high_52: current_price * 1.2,
            low_52,
            trend: Trend::Flat,
            market_cap_cr: 100.0,
            pe,
            roe_percent,
        }
    }

    fn emphasis_at(table: &StyledTable, row: usize, column: Column) -> Option<Emphasis> {
        let index = table
            .columns
            .iter()
            .position(|candidate| *candidate == column)
            .expect("column present");
        table.rows[row][index].emphasis
    }

    #[test]
    fn highlights_column_extremes() {
        let table = ResultTable::new(vec![
            record("A", 1500.0, 1000.0, Some(18.2), 17.0),
            record("B", 800.0, 600.0, Some(9.5), 14.0),
            record("C", 300.0, 250.0, None, 21.0),
        ]);

        let styled = StyledTable::from_table(&table, &CurrencyFormat::default());

        assert_eq!(emphasis_at(&styled, 0, Column::CurrentPrice), Some(Emphasis::Maximum));
        assert_eq!(emphasis_at(&styled, 1, Column::CurrentPrice), None);
        assert_eq!(emphasis_at(&styled, 2, Column::RoePercent), Some(Emphasis::Maximum));
        assert_eq!(emphasis_at(&styled, 2, Column::Low52), Some(Emphasis::Minimum));
        // absent P/E is ignored when finding the minimum
        assert_eq!(emphasis_at(&styled, 1, Column::Pe), Some(Emphasis::Minimum));
        assert_eq!(emphasis_at(&styled, 2, Column::Pe), None);
        assert_eq!(emphasis_at(&styled, 0, Column::MarketCapCr), None);
    }

    #[test]
    fn ties_are_all_highlighted() {
        let table = ResultTable::new(vec![
            record("A", 500.0, 400.0, Some(10.0), 15.0),
            record("B", 500.0, 400.0, Some(10.0), 15.0),
        ]);

        let styled = StyledTable::from_table(&table, &CurrencyFormat::default());
        for row in 0..2 {
            assert_eq!(emphasis_at(&styled, row, Column::CurrentPrice), Some(Emphasis::Maximum));
            assert_eq!(emphasis_at(&styled, row, Column::Pe), Some(Emphasis::Minimum));
        }
    }

    #[test]
    fn formats_cells_per_column() {
        let table = ResultTable::new(vec![record("HDFC Bank", 1500.0, 1000.0, None, 17.0)]);

        let styled = StyledTable::from_table(&table, &CurrencyFormat::default());
        let texts = styled.rows[0]
            .iter()
            .map(|cell| cell.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec![
                "HDFC Bank",
                "\u{20b9}1500.00",
                "\u{20b9}1800.00",
                "\u{20b9}1000.00",
                "\u{2194}\u{fe0f}",
                "100.00",
                "n/a",
                "17.00",
            ]
        );
        assert_eq!(styled.headers().next(), Some("Company"));
    }

    #[test]
    fn empty_table_has_headers_and_no_rows() {
        let styled = StyledTable::from_table(&ResultTable::default(), &CurrencyFormat::default());
        assert!(styled.is_empty());
        assert_eq!(styled.headers().count(), 8);
    }
}
