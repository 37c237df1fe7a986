//! Error handling for logboot
//!
//! Only installation can fail. Configuration problems never surface here:
//! they become [`ConfigWarning`](crate::ConfigWarning)s and the prior value
//! is kept.

/// Type alias for Result with [`LogError`] for logging operations
pub type LogResult<T> = Result<T, LogError>;

/// Logger installation failure
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// Another subscriber already owns the global default
    #[error("a global tracing subscriber was already installed by someone else")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// The installed layer stack could not be swapped
    #[error("failed to reload logger: {0}")]
    Reload(String),
}

impl From<tracing_subscriber::reload::Error> for LogError {
    fn from(err: tracing_subscriber::reload::Error) -> Self {
        Self::Reload(err.to_string())
    }
}
