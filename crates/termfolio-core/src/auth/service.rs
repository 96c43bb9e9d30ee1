//! Session service with the single hardcoded admin identity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::model::{Role, Session, User};

/// How long a session lives after sign-in.
pub const SESSION_TTL_DAYS: i64 = 7;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

fn admin_user() -> User {
    User {
        id: "admin-1".to_string(),
        name: "Admin User".to_string(),
        email: "admin@example.com".to_string(),
        role: Role::Admin,
    }
}

/// Outcome of a sign-in attempt. Sign-in never fails with an error; a bad
/// credential is an unsuccessful result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResult {
    pub success: bool,
    pub message: String,
}

/// Durable cache for the session, so a sign-in survives restarts.
/// Best-effort, like the project cache.
pub trait SessionCache: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    /// `None` clears the cached session.
    fn save(&self, session: Option<&Session>) -> Result<()>;
}

/// Cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSessionCache;

impl SessionCache for NullSessionCache {
    fn load(&self) -> Result<Option<Session>> {
        Ok(None)
    }

    fn save(&self, _session: Option<&Session>) -> Result<()> {
        Ok(())
    }
}

/// Holds the at-most-one session for this terminal.
pub struct AuthService {
    session: Option<Session>,
    cache: Box<dyn SessionCache>,
}

impl AuthService {
    pub fn new(cache: Box<dyn SessionCache>) -> Self {
        let session = match cache.load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "session cache unreadable, starting signed out");
                None
            }
        };
        Self { session, cache }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(NullSessionCache))
    }

    /// Attempts to sign in. Only the hardcoded admin identity succeeds.
    pub fn sign_in(&mut self, username: &str, password: &str) -> SignInResult {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            self.session = Some(Session {
                user: admin_user(),
                expires: Utc::now() + Duration::days(SESSION_TTL_DAYS),
            });
            self.persist();
            SignInResult {
                success: true,
                message: "Signed in successfully".to_string(),
            }
        } else {
            SignInResult {
                success: false,
                message: "Invalid credentials".to_string(),
            }
        }
    }

    /// Clears the session unconditionally.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.persist();
    }

    /// The current session, enforcing lazy expiry: an expired session is
    /// signed out on read and `None` is returned.
    pub fn session(&mut self) -> Option<&Session> {
        self.session_at(Utc::now())
    }

    /// Expiry check against an explicit instant. `session()` passes the
    /// wall clock; tests pass whatever they need.
    pub fn session_at(&mut self, now: DateTime<Utc>) -> Option<&Session> {
        let expired = self
            .session
            .as_ref()
            .is_some_and(|s| s.is_expired_at(now));
        if expired {
            self.sign_out();
        }
        self.session.as_ref()
    }

    pub fn current_user(&mut self) -> Option<User> {
        self.session().map(|s| s.user.clone())
    }

    /// True iff a non-expired admin session exists.
    pub fn is_admin(&mut self) -> bool {
        self.session().is_some_and(|s| s.user.role == Role::Admin)
    }

    fn persist(&self) {
        if let Err(err) = self.cache.save(self.session.as_ref()) {
            tracing::warn!(error = %err, "session cache write failed");
        }
    }
}
