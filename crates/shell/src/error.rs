use thiserror::Error;

use stockroom_core::DomainError;

pub type ShellResult<T> = Result<T, ShellError>;

/// Errors raised at the console boundary.
///
/// `Parse` is recoverable (reported, session continues); the rest end the
/// session. Not-found is handled before it ever becomes a `ShellError`.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShellError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
