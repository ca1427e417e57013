use banknifty_core::{CoreError, ExportError, RenderError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Command(_) => 2,
            Self::Core(error) => match error {
                CoreError::Validation(_) => 2,
                CoreError::Serialization(_) => 4,
                CoreError::Render(_) => 6,
                CoreError::Export(_) => 7,
                CoreError::DirectoryFile { .. } => 10,
            },
            Self::Serialization(_) => 4,
            Self::Render(_) => 6,
            Self::Export(_) => 7,
            Self::Io(_) => 10,
        }
    }
}

/// Exit code when every requested symbol had to be substituted.
pub const SOURCE_UNREACHABLE_EXIT: u8 = 3;
