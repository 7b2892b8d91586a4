//! # Console Error Type
//!
//! Failures that end the session. Domain errors from `warehouse-core` never
//! show up here: the session reports them to the operator and carries on.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CoreError (duplicate id, bad stock amount, ...)                        │
//! │      └──► printed as a message, menu shown again                        │
//! │                                                                         │
//! │  ValidationError (not a number, ...)                                    │
//! │      └──► printed, same prompt asked again                              │
//! │                                                                         │
//! │  ConsoleError::InputClosed                                              │
//! │      └──► session ends normally                                         │
//! │                                                                         │
//! │  ConsoleError::Io / ConsoleError::Config                                │
//! │      └──► main logs it and exits with a failure code                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Startup configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

/// Convenience type alias for Results with ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
