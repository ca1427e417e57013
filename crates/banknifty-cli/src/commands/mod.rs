mod companies;
mod dashboard;
mod export;
mod glossary;

use std::sync::Arc;

use banknifty_core::{
    Dashboard, DashboardConfig, FilterCriteria, FixtureSource, QuoteFetcher, QuoteSource,
    TickerDirectory, YahooAdapter,
};
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub use dashboard::DashboardView;
pub use export::ExportSummary;

/// What a command produced, before rendering.
#[derive(Debug)]
pub enum CommandOutput {
    Dashboard(Box<DashboardView>),
    Export(ExportSummary),
    Companies(TickerDirectory),
    Glossary(Vec<banknifty_core::GlossaryEntry>),
}

#[derive(Debug)]
pub struct CommandResult {
    pub output: CommandOutput,
    pub warnings: Vec<String>,
    pub source_unreachable: bool,
}

impl CommandResult {
    pub fn ok(output: CommandOutput) -> Self {
        Self {
            output,
            warnings: Vec::new(),
            source_unreachable: false,
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_source_unreachable(mut self, source_unreachable: bool) -> Self {
        self.source_unreachable = source_unreachable;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let config = load_config(cli)?;

    match &cli.command {
        Command::Companies => Ok(companies::run(&config)),
        Command::Glossary => Ok(glossary::run()),
        Command::Dashboard(args) => {
            let criteria = criteria(cli, &config)?;
            let dashboard = Dashboard::new(config, fetcher(cli));
            dashboard::run(args, &dashboard, &criteria).await
        }
        Command::Export(args) => {
            let criteria = criteria(cli, &config)?;
            let dashboard = Dashboard::new(config, fetcher(cli));
            export::run(args, &dashboard, &criteria).await
        }
    }
}

fn load_config(cli: &Cli) -> Result<DashboardConfig, CliError> {
    let config = DashboardConfig::default();
    match &cli.tickers {
        Some(path) => {
            let directory = TickerDirectory::from_json_path(path)?;
            debug!(path = %path.display(), companies = directory.len(), "ticker directory loaded");
            Ok(config.with_directory(directory))
        }
        None => Ok(config),
    }
}

fn fetcher(cli: &Cli) -> QuoteFetcher {
    let source: Arc<dyn QuoteSource> = if cli.mock {
        Arc::new(FixtureSource::synthetic())
    } else {
        Arc::new(YahooAdapter::default())
    };
    QuoteFetcher::new(source)
}

/// Build the filter from the global controls.
///
/// No `--company` means every company in the directory; `--no-companies`
/// selects none.
fn criteria(cli: &Cli, config: &DashboardConfig) -> Result<FilterCriteria, CliError> {
    let bounds = config.controls;
    if !bounds.min_roe.contains(cli.min_roe) {
        return Err(CliError::Command(format!(
            "--min-roe {} is outside {}..={}",
            cli.min_roe, bounds.min_roe.min, bounds.min_roe.max
        )));
    }
    if !bounds.max_pe.contains(cli.max_pe) {
        return Err(CliError::Command(format!(
            "--max-pe {} is outside {}..={}",
            cli.max_pe, bounds.max_pe.min, bounds.max_pe.max
        )));
    }

    let min_roe = f64::from(cli.min_roe);
    let max_pe = f64::from(cli.max_pe);
    if cli.no_companies {
        return Ok(FilterCriteria::new(Vec::<String>::new(), min_roe, max_pe));
    }
    if cli.companies.is_empty() {
        return Ok(FilterCriteria::all(&config.directory, min_roe, max_pe));
    }

    config.directory.validate_selection(&cli.companies)?;
    Ok(FilterCriteria::new(cli.companies.iter().cloned(), min_roe, max_pe))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid args")
    }

    #[test]
    fn no_company_selects_the_whole_directory() {
        let cli = parse(&["banknifty", "dashboard"]);
        let config = DashboardConfig::default();

        let criteria = criteria(&cli, &config).expect("defaults are valid");
        assert_eq!(criteria.selected_companies.len(), config.directory.len());
        assert_eq!(criteria.min_roe, 10.0);
        assert_eq!(criteria.max_pe, 25.0);
    }

    #[tokio::test]
    async fn no_companies_renders_an_empty_dashboard() {
        let cli = parse(&["banknifty", "dashboard", "--mock", "--no-companies"]);

        let result = run(&cli).await.expect("empty selection is valid");
        assert!(!result.source_unreachable);
        match result.output {
            CommandOutput::Dashboard(view) => {
                assert!(view.snapshot.table.is_empty());
                assert!(view.charts.is_empty());
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn unknown_company_is_a_validation_error() {
        let cli = parse(&["banknifty", "dashboard", "--company", "Gotham Bank"]);

        let error = criteria(&cli, &DashboardConfig::default()).expect_err("unknown company");
        assert!(matches!(error, CliError::Validation(_)));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn missing_tickers_file_maps_to_io_exit_code() {
        let cli = parse(&["banknifty", "companies", "--tickers", "/definitely/not/here.json"]);

        let error = load_config(&cli).expect_err("file does not exist");
        assert_eq!(error.exit_code(), 10);
    }

    #[tokio::test]
    async fn mock_dashboard_produces_rows_without_network() {
        let cli = parse(&["banknifty", "dashboard", "--mock", "--min-roe", "0", "--max-pe", "50"]);

        let result = run(&cli).await.expect("mock run succeeds");
        assert!(!result.source_unreachable);
        match result.output {
            CommandOutput::Dashboard(view) => {
                assert!(!view.snapshot.table.is_empty());
                assert_eq!(view.charts.len(), view.snapshot.table.len());
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }
}
