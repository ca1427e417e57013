use banknifty_core::{
    charts_for, BarChartSpec, CurrencyFormat, Dashboard, DashboardSnapshot, FilterCriteria,
    StyledTable,
};
use serde::Serialize;

use crate::cli::DashboardArgs;
use crate::error::CliError;

use super::export::write_workbook;
use super::{CommandOutput, CommandResult, ExportSummary};

/// Everything the dashboard view draws.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub snapshot: DashboardSnapshot,
    #[serde(skip)]
    pub styled: StyledTable,
    #[serde(skip)]
    pub currency: CurrencyFormat,
    pub charts: Vec<BarChartSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportSummary>,
}

pub async fn run(
    args: &DashboardArgs,
    dashboard: &Dashboard,
    criteria: &FilterCriteria,
) -> Result<CommandResult, CliError> {
    let snapshot = dashboard.run(criteria).await?;

    let styled = StyledTable::from_table(&snapshot.table, &dashboard.config().currency);
    let charts = if args.no_charts {
        Vec::new()
    } else {
        charts_for(&snapshot.table)
    };
    // A chart that cannot be drawn fails the whole run, in every output format.
    charts.iter().try_for_each(BarChartSpec::validate)?;

    let export = match &args.export {
        Some(path) => Some(write_workbook(&snapshot.table, &dashboard.config().export, path)?),
        None => None,
    };

    let warnings = snapshot.warnings.clone();
    let source_unreachable = snapshot.source_unreachable();
    let view = DashboardView {
        snapshot,
        styled,
        currency: dashboard.config().currency.clone(),
        charts,
        export,
    };

    Ok(CommandResult::ok(CommandOutput::Dashboard(Box::new(view)))
        .with_warnings(warnings)
        .with_source_unreachable(source_unreachable))
}
