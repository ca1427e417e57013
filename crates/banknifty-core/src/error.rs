use thiserror::Error;

/// Validation and contract errors exposed by `banknifty-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("company name cannot be empty")]
    EmptyCompanyName,
    #[error("company '{name}' appears more than once in the ticker directory")]
    DuplicateCompany { name: String },
    #[error("company '{name}' is not in the ticker directory")]
    UnknownCompany { name: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
}

/// Failure while rendering the styled table or a bar chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart '{title}' has a non-finite value for bar '{label}'")]
    NonFiniteBar { title: String, label: &'static str },

    #[error("render output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while serializing the result table to a workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to write workbook: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read ticker directory '{path}': {source}")]
    DirectoryFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
