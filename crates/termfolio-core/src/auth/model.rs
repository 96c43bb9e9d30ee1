//! Auth domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role; only `Admin` unlocks the admin command category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// A signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A session; exists only while someone is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    /// Expiry instant; checked lazily on every read, no background timer.
    pub expires: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_role_parses_lowercase() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn test_session_expiry_check() {
        let now = Utc::now();
        let session = Session {
            user: User {
                id: "u".to_string(),
                name: "U".to_string(),
                email: "u@example.com".to_string(),
                role: Role::User,
            },
            expires: now + Duration::days(1),
        };
        assert!(!session.is_expired_at(now));
        assert!(session.is_expired_at(now + Duration::days(2)));
    }
}
