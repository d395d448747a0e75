//! Shared error type across tally crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// No counter with the requested name.
    NotFound,
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
///
/// `NotFound` is the only domain error; the rest cover config loading,
/// storage-level input rules, and infrastructure failures.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Could not find counter {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::NotFound(_) => ClientCode::NotFound,
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TallyError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn not_found_message_names_the_counter() {
        let err = TallyError::NotFound("ghost".into());
        assert_eq!(err.to_string(), "Could not find counter ghost");
        assert_eq!(err.client_code().as_str(), "NOT_FOUND");
        assert!(err.is_not_found());
    }

    #[test]
    fn other_kinds_are_not_not_found() {
        assert!(!TallyError::BadRequest("x".into()).is_not_found());
        assert_eq!(TallyError::UnsupportedVersion.client_code(), ClientCode::UnsupportedVersion);
        assert_eq!(TallyError::Internal("boom".into()).client_code().as_str(), "INTERNAL");
    }
}
