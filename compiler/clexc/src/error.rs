//! Errors reported by the driver.

use std::io;

use thiserror::Error;

/// Everything that can make a `clexc` invocation fail.
///
/// Scanning itself never fails; illegal tokens only become an error when
/// `--deny-illegal` is given.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to write tokens: {0}")]
    Write(#[from] io::Error),

    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing file path")]
    MissingPath,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("{count} illegal token(s) in '{path}'")]
    IllegalTokens { path: String, count: usize },
}

impl CliError {
    /// Classify a failed read of `path`.
    pub fn from_read(path: &str, err: io::Error) -> Self {
        let path = path.to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: err },
        }
    }

    /// Process exit status for this error.
    ///
    /// Usage errors exit with 2, rejected input (illegal tokens) with 3,
    /// everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingPath | CliError::UnknownOption(_) | CliError::UnexpectedArgument(_) => {
                2
            }
            CliError::IllegalTokens { .. } => 3,
            CliError::NotFound { .. }
            | CliError::PermissionDenied { .. }
            | CliError::InvalidUtf8 { .. }
            | CliError::Read { .. }
            | CliError::Write(_)
            | CliError::Json(_) => 1,
        }
    }

    /// `true` when the error came from bad command-line arguments.
    pub fn is_usage(&self) -> bool {
        self.exit_code() == 2
    }
}
