//! Shared error type across lockstep crates.

use thiserror::Error;

/// Stable error codes, used in logs and by embedders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input (config, address).
    BadRequest,
    /// Listener could not be bound.
    Bind,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Bind => "BIND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LockstepError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum LockstepError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl LockstepError {
    /// Map the error to a stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LockstepError::BadRequest(_) => ClientCode::BadRequest,
            LockstepError::Bind(_) => ClientCode::Bind,
            LockstepError::Internal(_) => ClientCode::Internal,
        }
    }
}
