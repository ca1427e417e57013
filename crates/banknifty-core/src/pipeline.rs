//! Explicit dashboard pipeline.
//!
//! `restrict -> fetch -> normalize -> assemble -> filter`. Nothing is cached
//! between runs; the host calls [`Dashboard::run`] again whenever a control
//! changes.

use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::data_source::SourceId;
use crate::error::{CoreError, ValidationError};
use crate::fetcher::QuoteFetcher;
use crate::{filter, table, FilterCriteria, ResultTable, TickerDirectory, UtcDateTime};

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub run_id: Uuid,
    /// Drives the "Last updated" caption.
    pub generated_at: UtcDateTime,
    pub source: SourceId,
    /// Symbols fetched after restricting the directory to the selection.
    pub requested: usize,
    pub criteria: FilterCriteria,
    pub table: ResultTable,
    /// One entry per symbol that was substituted with zero values.
    pub warnings: Vec<String>,
}

impl DashboardSnapshot {
    /// Every requested symbol had to be substituted.
    pub fn source_unreachable(&self) -> bool {
        self.requested > 0 && self.warnings.len() == self.requested
    }
}

pub struct Dashboard {
    config: DashboardConfig,
    fetcher: QuoteFetcher,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, fetcher: QuoteFetcher) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn directory(&self) -> &TickerDirectory {
        &self.config.directory
    }

    /// Default criteria: every company, slider defaults.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::all(
            &self.config.directory,
            f64::from(self.config.controls.min_roe.default),
            f64::from(self.config.controls.max_pe.default),
        )
    }

    /// Run the whole pipeline for `criteria`.
    ///
    /// Symbols the source cannot answer are substituted, never fatal; they
    /// are reported in [`DashboardSnapshot::warnings`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when a bound is not finite.
    pub async fn run(&self, criteria: &FilterCriteria) -> Result<DashboardSnapshot, CoreError> {
        validate_bounds(criteria)?;

        let run_id = Uuid::new_v4();
        let span = info_span!("dashboard_run", %run_id, source = %self.fetcher.source_id());

        let snapshot = async move {
            let generated_at = UtcDateTime::now();
            let selected = self.config.directory.restrict(&criteria.selected_companies);
            let report = self.fetcher.fetch(&selected).await;
            let assembled = table::assemble(&report.quotes);
            let filtered = filter::apply(&assembled, criteria);

            info!(
                selected = selected.len(),
                assembled = assembled.len(),
                retained = filtered.len(),
                substituted = report.unavailable.len(),
                "dashboard run complete"
            );

            DashboardSnapshot {
                run_id,
                generated_at,
                source: self.fetcher.source_id(),
                requested: selected.len(),
                criteria: criteria.clone(),
                table: filtered,
                warnings: report.unavailable.iter().map(|u| u.warning()).collect(),
            }
        }
        .instrument(span)
        .await;

        Ok(snapshot)
    }
}

fn validate_bounds(criteria: &FilterCriteria) -> Result<(), ValidationError> {
    if !criteria.min_roe.is_finite() {
        return Err(ValidationError::NonFiniteValue { field: "min_roe" });
    }
    if !criteria.max_pe.is_finite() {
        return Err(ValidationError::NonFiniteValue { field: "max_pe" });
    }
    Ok(())
}
