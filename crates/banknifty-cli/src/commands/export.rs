//! Download action: write the filtered table to an XLSX workbook.

use std::path::{Path, PathBuf};

use banknifty_core::{Dashboard, Download, ExportError, ExportSettings, FilterCriteria, ResultTable};
use serde::Serialize;
use tracing::info;

use crate::cli::ExportArgs;
use crate::error::CliError;

use super::{CommandOutput, CommandResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub mime_type: &'static str,
    pub rows: usize,
    pub bytes: usize,
}

pub async fn run(
    args: &ExportArgs,
    dashboard: &Dashboard,
    criteria: &FilterCriteria,
) -> Result<CommandResult, CliError> {
    let snapshot = dashboard.run(criteria).await?;

    let settings = &dashboard.config().export;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.file_name));
    let summary = write_workbook(&snapshot.table, settings, &path)?;

    let source_unreachable = snapshot.source_unreachable();
    Ok(CommandResult::ok(CommandOutput::Export(summary))
        .with_warnings(snapshot.warnings)
        .with_source_unreachable(source_unreachable))
}

/// Build the workbook in memory, then write it to `path` in one go.
pub fn write_workbook(
    table: &ResultTable,
    settings: &ExportSettings,
    path: &Path,
) -> Result<ExportSummary, CliError> {
    let download = Download::xlsx(table, settings)?;
    std::fs::write(path, &download.bytes).map_err(ExportError::from)?;

    info!(
        path = %path.display(),
        rows = table.len(),
        bytes = download.bytes.len(),
        "workbook written"
    );
    Ok(ExportSummary {
        path: path.to_path_buf(),
        mime_type: download.mime_type,
        rows: table.len(),
        bytes: download.bytes.len(),
    })
}
