//! Session: snapshot of the authentication provider's state.
//!
//! The provider itself (login, token issuance, storage) lives outside this
//! workspace. Callers read a [`Session`] at call time and pass it explicitly to
//! every operation that needs it.

use crate::id::UserId;

/// Credentials of the acting user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<UserId>,
}

impl Session {
    /// A session with no credentials.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session for a logged-in user.
    #[must_use]
    pub fn authenticated(token: impl Into<String>, user_id: UserId) -> Self {
        Self {
            token: Some(token.into()),
            user_id: Some(user_id),
        }
    }

    /// Whether a token is present. Only gates rendering of create controls.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// `Authorization` header value for the current token.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(|token| format!("Bearer {token}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_be_authenticated_when_anonymous() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.bearer().is_none());
    }

    #[test]
    fn should_build_bearer_header_from_token() {
        let session = Session::authenticated("abc", UserId::new("u1"));
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn should_treat_empty_token_as_anonymous() {
        let session = Session {
            token: Some(String::new()),
            user_id: None,
        };
        assert!(!session.is_authenticated());
        assert!(session.bearer().is_none());
    }
}
