//! Unified path management for termfolio state files.
//!
//! All durable state lives under one per-user configuration directory so
//! every cache agrees on where its file goes.
//!
//! ```text
//! ~/.config/termfolio/         # state directory (platform equivalent elsewhere)
//! ├── projects.json            # project records overlaying the seed
//! ├── session.json             # current auth session, if signed in
//! └── theme.json               # selected theme
//! ```

use std::path::PathBuf;

use termfolio_core::{Result, TermError};

const APP_DIR: &str = "termfolio";

/// Unified path management for termfolio.
pub struct TermfolioPaths;

impl TermfolioPaths {
    /// File name for the persisted project records.
    pub const PROJECTS_FILE: &'static str = "projects.json";
    /// File name for the persisted auth session.
    pub const SESSION_FILE: &'static str = "session.json";
    /// File name for the persisted theme selection.
    pub const THEME_FILE: &'static str = "theme.json";

    /// Returns the termfolio state directory for this platform.
    ///
    /// The directory is not created here; writers create it on first save.
    pub fn state_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| TermError::Io {
                message: "Cannot find home directory".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_dir_is_the_per_user_app_directory() {
        let dir = TermfolioPaths::state_dir().unwrap();
        assert!(dir.ends_with(APP_DIR));
    }
}
