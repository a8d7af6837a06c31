//! Errors surfaced by subcommand handlers.

use std::fmt;

use maketen_engine::errors::EngineError;

/// Failure of a subcommand. [`crate::run`] prints it as `Error: ...` and
/// exits with [`crate::exit_code::ERROR`].
#[derive(Debug)]
pub enum CliError {
    /// Reading input, writing output or the round record file failed
    Io(std::io::Error),
    /// Arguments or input data that cannot be used
    InvalidInput(String),
    /// Configuration file or `MAKETEN_*` variables rejected
    Config(String),
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error.to_string())
    }
}
