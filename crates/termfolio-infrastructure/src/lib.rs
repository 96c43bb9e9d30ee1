//! Durable state for the termfolio terminal.
//!
//! The core works against cache traits; this crate provides the JSON file
//! implementations plus path management for the state directory.

pub mod json_state;
pub mod paths;

pub use crate::json_state::{JsonProjectCache, JsonSessionCache, JsonStateDir, JsonThemeCache};
pub use crate::paths::TermfolioPaths;
