//! User: an account supplied by the authentication provider.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A registered user, as exposed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub email: String,
}

/// Reference to a user from another record, e.g. an event's creator.
///
/// The email is only known when the backend resolved the relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserRef {
    /// Reference a user by identifier only.
    #[must_use]
    pub fn by_id(id: UserId) -> Self {
        Self { id, email: None }
    }
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: Some(user.email.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_reference_without_email() {
        let parsed: UserRef = serde_json::from_str(r#"{"_id":"u1"}"#).unwrap();
        assert_eq!(parsed, UserRef::by_id(UserId::new("u1")));
    }

    #[test]
    fn should_skip_missing_email_when_serializing() {
        let json = serde_json::to_value(UserRef::by_id(UserId::new("u1"))).unwrap();
        assert_eq!(json, serde_json::json!({"_id": "u1"}));
    }

    #[test]
    fn should_carry_email_when_built_from_user() {
        let user = User {
            id: UserId::new("u2"),
            email: "ada@example.com".to_string(),
        };
        let reference = UserRef::from(&user);
        assert_eq!(reference.email.as_deref(), Some("ada@example.com"));
    }
}
