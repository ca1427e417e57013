//! CLI argument definitions.
//!
//! The global options are the dashboard controls: company multi-select and
//! the two sliders. Every subcommand reads them.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dashboard` | Styled table, bar charts and optional workbook export |
//! | `export` | Write the filtered table to an XLSX workbook |
//! | `companies` | List the ticker directory |
//! | `glossary` | Explain the metrics |
//!
//! # Examples
//!
//! ```bash
//! banknifty dashboard
//! banknifty dashboard --min-roe 15 --max-pe 20 --company "HDFC Bank" --company "ICICI Bank"
//! banknifty export --output banks.xlsx --mock
//! banknifty companies --format json --pretty
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Bank Nifty constituents dashboard
#[derive(Debug, Parser)]
#[command(
    name = "banknifty",
    author,
    version,
    about = "Bank Nifty constituents dashboard",
    long_about = "Fetches current quotes for the Bank Nifty constituents, derives a trend \
indicator from the 52-week range, filters by ROE and P/E, and renders a highlighted table \
with one price chart per company. The filtered table can be exported to Excel."
)]
pub struct Cli {
    /// Company to include; repeat for several. Defaults to every company.
    #[arg(long = "company", global = true, value_name = "NAME")]
    pub companies: Vec<String>,

    /// Deselect every company: the table, charts and workbook come out empty.
    #[arg(long, global = true, default_value_t = false, conflicts_with = "companies")]
    pub no_companies: bool,

    /// Minimum ROE in percent (0-30).
    #[arg(
        long,
        global = true,
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(0..=30)
    )]
    pub min_roe: u32,

    /// Maximum P/E ratio (5-50). Companies without a P/E always pass.
    #[arg(
        long,
        global = true,
        default_value_t = 25,
        value_parser = clap::value_parser!(u32).range(5..=50)
    )]
    pub max_pe: u32,

    /// JSON file replacing the built-in ticker directory.
    ///
    /// Expected shape: `[{"company": "HDFC Bank", "symbol": "HDFCBANK.NS"}, ...]`
    #[arg(long, global = true, value_name = "FILE")]
    pub tickers: Option<PathBuf>,

    /// Use deterministic offline data instead of Yahoo Finance.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log filter directive written to stderr (e.g. `info`, `banknifty_core=debug`).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal table and charts.
    Table,
    /// Single JSON object.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the filtered, highlighted table and one bar chart per company.
    ///
    /// # Examples
    ///
    ///   banknifty dashboard
    ///   banknifty dashboard --min-roe 12 --no-charts
    ///   banknifty dashboard --export dashboard.xlsx
    Dashboard(DashboardArgs),

    /// Write the filtered table to an Excel workbook.
    Export(ExportArgs),

    /// List the companies and ticker symbols in the directory.
    Companies,

    /// Explain what the metrics mean.
    Glossary,
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Also write the filtered table to this workbook path.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Skip the per-company bar charts.
    #[arg(long, default_value_t = false)]
    pub no_charts: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Workbook path. Defaults to `bank_nifty_dashboard.xlsx` in the current directory.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_match_the_dashboard_controls() {
        let cli = Cli::try_parse_from(["banknifty", "dashboard"]).expect("valid args");

        assert!(cli.companies.is_empty());
        assert_eq!(cli.min_roe, 10);
        assert_eq!(cli.max_pe, 25);
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.log_level, "warn");
        assert!(matches!(
            cli.command,
            Command::Dashboard(DashboardArgs { export: None, no_charts: false })
        ));
    }

    #[test]
    fn global_controls_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "banknifty",
            "export",
            "--company",
            "HDFC Bank",
            "--company",
            "Axis Bank",
            "--min-roe",
            "0",
            "--max-pe",
            "50",
            "--output",
            "out.xlsx",
        ])
        .expect("valid args");

        assert_eq!(cli.companies, vec!["HDFC Bank", "Axis Bank"]);
        assert_eq!(cli.min_roe, 0);
        assert_eq!(cli.max_pe, 50);
        match cli.command {
            Command::Export(args) => assert_eq!(args.output, Some(PathBuf::from("out.xlsx"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn empty_selection_cannot_be_combined_with_a_company() {
        let cli = Cli::try_parse_from(["banknifty", "dashboard", "--no-companies"])
            .expect("valid args");
        assert!(cli.no_companies);

        assert!(Cli::try_parse_from([
            "banknifty",
            "dashboard",
            "--no-companies",
            "--company",
            "HDFC Bank",
        ])
        .is_err());
    }

    #[test]
    fn slider_values_outside_their_range_are_rejected() {
        assert!(Cli::try_parse_from(["banknifty", "dashboard", "--min-roe", "31"]).is_err());
        assert!(Cli::try_parse_from(["banknifty", "dashboard", "--max-pe", "4"]).is_err());
        assert!(Cli::try_parse_from(["banknifty", "dashboard", "--max-pe", "51"]).is_err());
    }
}
