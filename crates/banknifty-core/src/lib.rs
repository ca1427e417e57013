//! # Bank Nifty Core
//!
//! Quote fetching, normalization, filtering, presentation model and export
//! for the Bank Nifty dashboard.
//!
//! ## Overview
//!
//! - **Domain models** for tickers, raw quotes, display rows and filters
//! - **Quote sources** behind the [`QuoteSource`] trait (Yahoo, fixture)
//! - **Pipeline** function taking [`FilterCriteria`] and returning a
//!   [`DashboardSnapshot`]
//! - **Presentation model**: styled table and bar-chart specs
//! - **Export** of the filtered table to an in-memory XLSX workbook
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Quote sources (Yahoo, fixture) |
//! | [`config`] | Injected dashboard configuration |
//! | [`data_source`] | Quote source trait and source errors |
//! | [`domain`] | Domain models |
//! | [`error`] | Core error types |
//! | [`export`] | XLSX export and download payload |
//! | [`fetcher`] | Sequential per-symbol fetcher |
//! | [`filter`] | ROE / P/E / company filters |
//! | [`http_client`] | HTTP client abstraction |
//! | [`normalize`] | Raw quote to display row, trend rule |
//! | [`pipeline`] | `restrict -> fetch -> normalize -> assemble -> filter` |
//! | [`present`] | Styled table, charts, glossary |
//! | [`table`] | Table assembly |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use banknifty_core::{Dashboard, DashboardConfig, QuoteFetcher, YahooAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::new(
//!         DashboardConfig::default(),
//!         QuoteFetcher::new(Arc::new(YahooAdapter::default())),
//!     );
//!
//!     let snapshot = dashboard.run(&dashboard.default_criteria()).await?;
//!     for row in snapshot.table.iter() {
//!         println!("{} {:.2} {}", row.company, row.current_price, row.trend);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / Host     │  FilterCriteria
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Dashboard      │────▶│ QuoteFetcher     │
//! │  (pipeline)     │     └────────┬─────────┘
//! └────────┬────────┘              ▼
//!          │              ┌──────────────────┐     ┌──────────────┐
//!          │              │ QuoteSource      │────▶│ HttpClient   │
//!          │              │ (Yahoo/fixture)  │     └──────────────┘
//!          ▼              └──────────────────┘
//! ┌─────────────────┐
//! │ ResultTable     │──▶ StyledTable / BarChartSpec / Download
//! └─────────────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod filter;
pub mod http_client;
pub mod normalize;
pub mod pipeline;
pub mod present;
pub mod table;

pub use adapters::{FixtureSource, YahooAdapter, YahooCrumb};

pub use config::{ControlBounds, CurrencyFormat, DashboardConfig, ExportSettings, SliderBounds};

pub use data_source::{QuoteSource, SourceError, SourceErrorKind, SourceId};

pub use domain::{
    DirectoryEntry, DisplayRecord, FilterCriteria, QuoteSnapshot, RawQuote, ResultTable, Symbol,
    TickerDirectory, Trend, UtcDateTime,
};

pub use error::{CoreError, ExportError, RenderError, ValidationError};

pub use export::{workbook_bytes, Download, XLSX_MIME};

pub use fetcher::{FetchReport, FetchedQuote, QuoteFetcher, Unavailable};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use pipeline::{Dashboard, DashboardSnapshot};

pub use present::{
    charts_for, glossary, render_charts, BarChartSpec, ChartBar, ChartColor, ChartRenderer,
    Column, Emphasis, GlossaryEntry, StyledCell, StyledTable, TableRenderer, GLOSSARY_TITLE,
};
