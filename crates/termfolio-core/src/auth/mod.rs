//! Mock authentication: models and the session service.
//!
//! Credentials are hardcoded and not a security boundary; this exists so
//! the terminal can gate its admin commands.

pub mod model;
pub mod service;

pub use model::{Role, Session, User};
pub use service::{AuthService, NullSessionCache, SessionCache, SignInResult};
