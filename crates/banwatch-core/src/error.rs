use thiserror::Error;

/// Top-level error type for Banwatch.
#[derive(Debug, Error)]
pub enum BanwatchError {
    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Error from the ban lookup service.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A locale outside the supported set was requested.
    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
