use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all hoist operations.
#[derive(Debug, Error, Diagnostic)]
pub enum HoistError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing client configuration (e.g. `~/.hoist/config.toml`).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check ~/.hoist/config.toml, or pass --url directly"))]
    Config { message: String },

    /// Network request failed before a response was received.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The repository manager rejected a request.
    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type HoistResult<T> = miette::Result<T>;
