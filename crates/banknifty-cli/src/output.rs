//! Table and JSON rendering.
//!
//! Table mode draws the styled table with highlighted extremes and one
//! horizontal bar chart per company, using 24-bit colors through crossterm.

use std::io::{self, Write};

use banknifty_core::{
    render_charts, BarChartSpec, ChartRenderer, CurrencyFormat, Emphasis, GlossaryEntry,
    RenderError, StyledTable, TableRenderer, TickerDirectory, UtcDateTime, GLOSSARY_TITLE,
};
use crossterm::style::{Color, Stylize};
use serde::Serialize;
use serde_json::Value;
use time::UtcOffset;

use crate::cli::OutputFormat;
use crate::commands::{CommandOutput, CommandResult, DashboardView, ExportSummary};
use crate::error::CliError;

const TITLE: &str = "Bank Nifty Stocks Dashboard";
const LIGHT_GREEN: Color = Color::Rgb { r: 144, g: 238, b: 144 };
const LIGHT_PINK: Color = Color::Rgb { r: 255, g: 182, b: 193 };
const BAR_WIDTH: usize = 40;

/// Offset used for the "Last updated" caption.
///
/// Call before any runtime worker thread exists; the lookup refuses to run in
/// a multi-threaded process and the caption then falls back to UTC.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

pub fn render(
    result: &CommandResult,
    format: OutputFormat,
    pretty: bool,
    offset: UtcOffset,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, result, format, pretty, offset)?;
    out.flush()?;
    Ok(())
}

pub fn render_to<W: Write>(
    out: &mut W,
    result: &CommandResult,
    format: OutputFormat,
    pretty: bool,
    offset: UtcOffset,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let envelope = JsonEnvelope {
                data: json_data(&result.output)?,
                warnings: &result.warnings,
            };
            let payload = if pretty {
                serde_json::to_string_pretty(&envelope)?
            } else {
                serde_json::to_string(&envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => {
            match &result.output {
                CommandOutput::Dashboard(view) => render_dashboard(out, view, offset)?,
                CommandOutput::Export(summary) => render_export(out, summary)?,
                CommandOutput::Companies(directory) => render_companies(out, directory)?,
                CommandOutput::Glossary(entries) => render_glossary(out, entries)?,
            }
            if !result.warnings.is_empty() {
                writeln!(out)?;
                writeln!(out, "warnings:")?;
                for warning in &result.warnings {
                    writeln!(out, "  - {warning}")?;
                }
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    data: Value,
    warnings: &'a [String],
}

fn json_data(output: &CommandOutput) -> Result<Value, serde_json::Error> {
    match output {
        CommandOutput::Dashboard(view) => serde_json::to_value(&**view),
        CommandOutput::Export(summary) => serde_json::to_value(summary),
        CommandOutput::Companies(directory) => serde_json::to_value(directory),
        CommandOutput::Glossary(entries) => Ok(serde_json::json!({
            "title": GLOSSARY_TITLE,
            "entries": entries,
        })),
    }
}

fn render_dashboard<W: Write>(
    out: &mut W,
    view: &DashboardView,
    offset: UtcOffset,
) -> Result<(), CliError> {
    writeln!(out, "{}", TITLE.bold())?;
    writeln!(out, "{}", last_updated(view.snapshot.generated_at, offset))?;
    writeln!(out)?;

    if view.styled.is_empty() {
        writeln!(out, "No companies match the current filters.")?;
    } else {
        TerminalTable::new(&mut *out).render_table(&view.styled)?;
    }

    if !view.charts.is_empty() {
        writeln!(out)?;
        render_charts(&mut TerminalCharts::new(&mut *out, &view.currency), &view.charts)?;
    }

    if let Some(summary) = &view.export {
        writeln!(out)?;
        render_export(out, summary)?;
    }
    Ok(())
}

fn last_updated(generated_at: UtcDateTime, offset: UtcOffset) -> String {
    let minutes = offset.whole_minutes();
    let zone = if minutes == 0 {
        String::from("UTC")
    } else {
        let sign = if minutes < 0 { '-' } else { '+' };
        let minutes = minutes.unsigned_abs();
        format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    };
    format!("Last updated: {} {zone}", generated_at.caption(offset))
}

fn render_export<W: Write>(out: &mut W, summary: &ExportSummary) -> io::Result<()> {
    writeln!(
        out,
        "exported {} row(s) to {} ({} bytes, {})",
        summary.rows,
        summary.path.display(),
        summary.bytes,
        summary.mime_type
    )
}

fn render_companies<W: Write>(out: &mut W, directory: &TickerDirectory) -> io::Result<()> {
    let width = directory
        .companies()
        .map(|company| company.chars().count())
        .chain(std::iter::once("Company".len()))
        .max()
        .unwrap_or_default();

    writeln!(out, "{:<width$}  Symbol", "Company")?;
    for entry in directory.entries() {
        writeln!(out, "{:<width$}  {}", entry.company, entry.symbol)?;
    }
    Ok(())
}

fn render_glossary<W: Write>(out: &mut W, entries: &[GlossaryEntry]) -> io::Result<()> {
    writeln!(out, "{}", GLOSSARY_TITLE.bold())?;
    for entry in entries {
        writeln!(out, "- {}: {}", entry.term.bold(), entry.meaning)?;
        for detail in &entry.details {
            writeln!(out, "    {detail}")?;
        }
    }
    Ok(())
}

/// Styled table drawn with padded columns.
///
/// Maximums get a light green background, minimums light pink.
pub struct TerminalTable<W> {
    out: W,
}

impl<W: Write> TerminalTable<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TableRenderer for TerminalTable<W> {
    fn render_table(&mut self, table: &StyledTable) -> Result<(), RenderError> {
        let headers = table.headers().collect::<Vec<_>>();
        let widths = headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                table
                    .rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| display_width(&cell.text))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();

        let header_line = headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(header, *width))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(self.out, "{}", header_line.bold())?;
        writeln!(
            self.out,
            "{}",
            widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join("-+-")
        )?;

        for row in &table.rows {
            for (index, (cell, width)) in row.iter().zip(&widths).enumerate() {
                if index > 0 {
                    write!(self.out, " | ")?;
                }
                let text = pad(&cell.text, *width);
                match cell.emphasis {
                    Some(Emphasis::Maximum) => {
                        write!(self.out, "{}", text.with(Color::Black).on(LIGHT_GREEN))?
                    }
                    Some(Emphasis::Minimum) => {
                        write!(self.out, "{}", text.with(Color::Black).on(LIGHT_PINK))?
                    }
                    None => write!(self.out, "{text}")?,
                }
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

/// Horizontal Current / High / Low bars, scaled per chart.
pub struct TerminalCharts<'a, W> {
    out: W,
    currency: &'a CurrencyFormat,
}

impl<'a, W: Write> TerminalCharts<'a, W> {
    pub fn new(out: W, currency: &'a CurrencyFormat) -> Self {
        Self { out, currency }
    }
}

impl<W: Write> ChartRenderer for TerminalCharts<'_, W> {
    fn render_chart(&mut self, chart: &BarChartSpec) -> Result<(), RenderError> {
        let max = chart.max_value();
        writeln!(self.out, "{}", chart.title.as_str().bold())?;
        for bar in &chart.bars {
            let filled = if max > 0.0 {
                ((bar.value.max(0.0) / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let (r, g, b) = bar.color.rgb();
            writeln!(
                self.out,
                "  {:<7} {}{} {}",
                bar.label,
                "\u{2588}".repeat(filled).with(Color::Rgb { r, g, b }),
                " ".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
                banknifty_core::present::currency(bar.value, self.currency)
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

fn display_width(text: &str) -> usize {
    // Variation selectors take no column.
    text.chars().filter(|ch| *ch != '\u{fe0f}').count()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use banknifty_core::{charts_for, DisplayRecord, ResultTable, Trend};

    use super::*;

    fn table() -> ResultTable {
        ResultTable::new(vec![
            DisplayRecord {
                company: "HDFC Bank".to_owned(),
                current_price: 1500.0,
                high_52: 1600.0,
                low_52: 1000.0,
                trend: Trend::Flat,
                market_cap_cr: 350_000.0,
                pe: Some(18.2),
                roe_percent: 17.0,
            },
            DisplayRecord {
                company: "Yes Bank".to_owned(),
                current_price: 20.0,
                high_52: 21.0,
                low_52: 15.0,
                trend: Trend::Up,
                market_cap_cr: 60_000.0,
                pe: None,
                roe_percent: 20.0,
            },
        ])
    }

    fn to_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).expect("utf8 output")
    }

    #[test]
    fn terminal_table_prints_headers_and_formatted_cells() {
        let styled = StyledTable::from_table(&table(), &CurrencyFormat::default());
        let mut buffer = Vec::new();

        TerminalTable::new(&mut buffer)
            .render_table(&styled)
            .expect("render succeeds");

        let output = to_string(buffer);
        assert!(output.contains("Current Price"));
        assert!(output.contains("\u{20b9}1500.00"));
        assert!(output.contains("n/a"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn terminal_charts_draw_one_block_per_company() {
        let charts = charts_for(&table());
        let currency = CurrencyFormat::default();
        let mut buffer = Vec::new();

        render_charts(&mut TerminalCharts::new(&mut buffer, &currency), &charts)
            .expect("render succeeds");

        let output = to_string(buffer);
        assert!(output.contains("HDFC Bank \u{2194}\u{fe0f}"));
        assert!(output.contains("Yes Bank \u{2b06}\u{fe0f}"));
        assert_eq!(output.matches("Current").count(), 2);
    }

    #[test]
    fn json_export_summary_is_wrapped_with_warnings() {
        let result = CommandResult::ok(CommandOutput::Export(ExportSummary {
            path: PathBuf::from("bank_nifty_dashboard.xlsx"),
            mime_type: banknifty_core::XLSX_MIME,
            rows: 2,
            bytes: 5_120,
        }))
        .with_warnings(vec!["PNB (PNB.NS): data unavailable".to_owned()]);
        let mut buffer = Vec::new();

        render_to(&mut buffer, &result, OutputFormat::Json, false, UtcOffset::UTC)
            .expect("render succeeds");

        let value: Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(value["data"]["rows"], 2);
        assert_eq!(value["data"]["path"], "bank_nifty_dashboard.xlsx");
        assert_eq!(value["warnings"][0], "PNB (PNB.NS): data unavailable");
    }

    #[test]
    fn companies_table_lists_every_symbol() {
        let result = CommandResult::ok(CommandOutput::Companies(TickerDirectory::bank_nifty()));
        let mut buffer = Vec::new();

        render_to(&mut buffer, &result, OutputFormat::Table, false, UtcOffset::UTC)
            .expect("render succeeds");

        let output = to_string(buffer);
        assert_eq!(output.lines().count(), 13);
        assert!(output.contains("HDFCBANK.NS"));
    }

    #[test]
    fn glossary_json_carries_the_title() {
        let result = CommandResult::ok(CommandOutput::Glossary(banknifty_core::glossary()));
        let mut buffer = Vec::new();

        render_to(&mut buffer, &result, OutputFormat::Json, true, UtcOffset::UTC)
            .expect("render succeeds");

        let value: Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(value["data"]["title"], "What These Metrics Mean");
    }

    #[test]
    fn caption_is_shown_in_the_local_offset() {
        let generated_at = UtcDateTime::parse("2024-03-05T04:00:00Z").expect("valid timestamp");
        let ist = UtcOffset::from_hms(5, 30, 0).expect("valid offset");
        let new_york = UtcOffset::from_hms(-5, 0, 0).expect("valid offset");

        assert_eq!(last_updated(generated_at, ist), "Last updated: 2024-03-05 09:30 UTC+05:30");
        assert_eq!(
            last_updated(generated_at, new_york),
            "Last updated: 2024-03-04 23:00 UTC-05:00"
        );
        assert_eq!(
            last_updated(generated_at, UtcOffset::UTC),
            "Last updated: 2024-03-05 04:00 UTC"
        );
    }
}
