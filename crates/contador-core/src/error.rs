//! Shared error type across contador crates.
//!
//! The counter itself cannot fail; these errors come from configuration,
//! startup, and requests that match no route.

use thiserror::Error;

use crate::protocol::ErrorBody;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// No such route.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ContadorError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ContadorError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ContadorError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ContadorError::BadRequest(_) => ClientCode::BadRequest,
            ContadorError::NotFound(_) => ClientCode::NotFound,
            ContadorError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            ContadorError::Internal(_) => ClientCode::Internal,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.client_code().as_str().to_string(),
            message: self.to_string(),
        }
    }
}
