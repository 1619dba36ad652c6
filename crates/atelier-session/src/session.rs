//! Session values.

use atelier_commerce::UserId;
use serde::{Deserialize, Serialize};

use crate::SessionError;

/// Longest accepted user id in a cookie.
const MAX_USER_ID_LEN: usize = 128;

/// A shopper's session, signed in or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Signed-in user, if any.
    pub user_id: Option<UserId>,
}

impl Session {
    /// Session for an anonymous shopper.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Session for a signed-in shopper.
    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Check if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Signed-in user id.
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// Read the signed-in user from a `Cookie` request header.
    pub fn from_cookie_header(header: &str, cookie_name: &str) -> Result<Self, SessionError> {
        let value = header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == cookie_name)
            .map(|(_, value)| value.trim().trim_matches('"'))
            .ok_or_else(|| SessionError::MissingCookie(cookie_name.to_string()))?;

        validate_user_id(value)?;
        Ok(Self::authenticated(UserId::new(value)))
    }
}

fn validate_user_id(value: &str) -> Result<(), SessionError> {
    let well_formed = !value.is_empty()
        && value.len() <= MAX_USER_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if well_formed {
        Ok(())
    } else {
        Err(SessionError::InvalidUserId(value.to_string()))
    }
}
