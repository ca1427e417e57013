//! In-memory spreadsheet export.

use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use crate::config::ExportSettings;
use crate::error::ExportError;
use crate::present::Column;
use crate::{DisplayRecord, ResultTable};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Payload for the host's download action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Build the workbook for `table` using the configured names.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the workbook cannot be serialized.
    pub fn xlsx(table: &ResultTable, settings: &ExportSettings) -> Result<Self, ExportError> {
        Ok(Self {
            file_name: settings.file_name.clone(),
            mime_type: XLSX_MIME,
            bytes: workbook_bytes(table, &settings.sheet_name)?,
        })
    }
}

/// Serialize `table` into a single-sheet XLSX held in memory.
///
/// The header row is always written, so an empty table still yields a valid
/// workbook. Numbers are numeric cells, an absent P/E is an empty cell and
/// the trend is written as its glyph.
pub fn workbook_bytes(table: &ResultTable, sheet_name: &str) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, column) in (0_u16..).zip(Column::ALL) {
        worksheet.write_string_with_format(0, col, column.header(), &header)?;
    }

    for (row, record) in (1_u32..).zip(table.iter()) {
        for (col, column) in (0_u16..).zip(Column::ALL) {
            match cell(record, column) {
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row, col, value)?;
                }
                Cell::Empty => {}
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(rows = table.len(), sheet = sheet_name, size = bytes.len(), "workbook built");
    Ok(bytes)
}

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
}

fn cell(record: &DisplayRecord, column: Column) -> Cell<'_> {
    match column {
        Column::Company => Cell::Text(&record.company),
        Column::Trend => Cell::Text(record.trend.glyph()),
        numeric => numeric.value(record).map_or(Cell::Empty, Cell::Number),
    }
}
