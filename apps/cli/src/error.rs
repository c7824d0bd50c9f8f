//! # CLI Error Type
//!
//! Errors raised by the console layer itself.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  ValidationError (bad number)  ──► re-prompt same field                 │
//! │  CoreError (duplicate, stock)  ──► message, back to menu                │
//! │  CliError::InvalidMenuChoice   ──► message, menu redisplayed            │
//! │  CliError::InputClosed (EOF)   ──► session ends cleanly                 │
//! │  CliError::Io / Config / Usage ──► propagated to main, exit non-zero    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Console layer errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// The menu selection is not one of the known options.
    #[error("Opción inválida. Por favor, seleccione una opción del 1 al 7")]
    InvalidMenuChoice(String),

    /// Standard input reached end of file.
    #[error("Entrada finalizada")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command line arguments were not understood.
    #[error("{0}\n\n{usage}", usage = crate::USAGE)]
    Usage(String),
}

/// Result type for console operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_message() {
        let err = CliError::InvalidMenuChoice("9".to_string());
        assert_eq!(
            err.to_string(),
            "Opción inválida. Por favor, seleccione una opción del 1 al 7"
        );
    }

    #[test]
    fn test_usage_includes_help_text() {
        let err = CliError::Usage("Unknown argument: --bogus".to_string());
        let text = err.to_string();
        assert!(text.starts_with("Unknown argument: --bogus"));
        assert!(text.contains("--config"));
    }
}
