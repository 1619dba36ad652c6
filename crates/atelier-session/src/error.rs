//! Session errors.

use thiserror::Error;

/// Session lookup error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The named cookie is not present.
    #[error("session cookie not found: {0}")]
    MissingCookie(String),

    /// The cookie value is not a usable user id.
    #[error("invalid user id in session cookie: {0}")]
    InvalidUserId(String),
}

impl SessionError {
    /// Check if this simply means "not signed in".
    pub fn is_anonymous(&self) -> bool {
        matches!(self, SessionError::MissingCookie(_))
    }
}
