//! Errors surfaced by the command-line tool.

use std::io;

use sqlcanon_core::ScannerKind;
use thiserror::Error;

/// Everything that can stop a command. `main` prints these as
/// `error: <message>` and exits with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },
    #[error("unexpected argument '{0}': only one input may be given")]
    ExtraArgument(String),
    #[error("the {0} scanner is not supported on this CPU")]
    UnsupportedScanner(ScannerKind),
}

impl CliError {
    /// Classify a failed read of `path`.
    pub fn read(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: err },
        }
    }
}
