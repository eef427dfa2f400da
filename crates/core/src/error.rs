use thiserror::Error;

/// Top-level error type used across the countdown crates.
#[derive(Debug, Error)]
pub enum CountdownError {
    /// A negative duration reached an operation that only accepts `>= 0`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = CountdownError> = std::result::Result<T, E>;
