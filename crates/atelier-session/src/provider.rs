//! Session providers.

use atelier_commerce::UserId;

use crate::Session;

/// Supplies the current shopper's session.
pub trait SessionProvider {
    /// The session for the current request or view.
    fn current_session(&self) -> Session;

    /// The signed-in user, if any.
    fn current_user(&self) -> Option<UserId> {
        self.current_session().user_id
    }
}

/// Provider that always returns the same session.
#[derive(Debug, Clone)]
pub struct StaticSessionProvider {
    session: Session,
}

impl StaticSessionProvider {
    /// Provider with no signed-in user.
    pub fn anonymous() -> Self {
        Self {
            session: Session::anonymous(),
        }
    }

    /// Provider with a signed-in user.
    pub fn signed_in(user_id: impl Into<UserId>) -> Self {
        Self {
            session: Session::authenticated(user_id.into()),
        }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn current_session(&self) -> Session {
        self.session.clone()
    }
}

/// Provider backed by the request's `Cookie` header.
///
/// A missing or malformed cookie yields an anonymous session.
#[derive(Debug, Clone)]
pub struct CookieSessionProvider {
    session: Session,
}

impl CookieSessionProvider {
    /// Resolve the session from an optional `Cookie` header.
    pub fn from_header(header: Option<&str>, cookie_name: &str) -> Self {
        let session = header
            .and_then(|h| Session::from_cookie_header(h, cookie_name).ok())
            .unwrap_or_else(Session::anonymous);
        Self { session }
    }
}

impl SessionProvider for CookieSessionProvider {
    fn current_session(&self) -> Session {
        self.session.clone()
    }
}
