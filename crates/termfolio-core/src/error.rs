//! Error types for the termfolio core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the terminal core.
///
/// Every variant maps to a user-visible condition; nothing here is fatal.
/// The dispatcher and the flow machine convert these into error-typed
/// results at the point of detection.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TermError {
    /// Input named a command that is not in the registry.
    #[error("command not found: {name}")]
    CommandNotFound { name: String },

    /// An admin-only command was dispatched without an admin session.
    #[error("Permission denied: Admin access required.")]
    PermissionDenied,

    /// `cd` target resolved to a path outside the virtual hierarchy.
    #[error("cd: {path}: No such directory")]
    NoSuchDirectory { path: String },

    /// `cat` target does not exist in the current directory.
    #[error("cat: {name}: No such file")]
    NoSuchFile { name: String },

    /// `open` target is not a known file or link.
    #[error("open: {target}: No such file or link")]
    NoSuchLink { target: String },

    /// A required interactive-flow field was submitted empty.
    #[error("{0}")]
    EmptyInput(String),

    /// An interactive-flow field name was not one of the editable fields.
    #[error("Invalid field: \"{field}\". Please choose from: {valid}")]
    InvalidField { field: String, valid: String },

    /// A deletion confirmation was neither `yes` nor `no`.
    #[error("Please type \"yes\" to confirm deletion or \"no\" to cancel.")]
    InvalidConfirmation,

    /// An interactive flow named a project id that is not in the store.
    #[error("Project with ID \"{id}\" not found. Available projects: {available}")]
    ProjectNotFound { id: String, available: String },

    /// A store mutation failed at a terminal flow step.
    #[error("{0}")]
    StoreMutationFailed(String),

    /// IO error (cache reads and writes).
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error (cache contents).
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TermError {
    /// Creates a CommandNotFound error.
    pub fn command_not_found(name: impl Into<String>) -> Self {
        Self::CommandNotFound { name: name.into() }
    }

    /// Creates a NoSuchDirectory error.
    pub fn no_such_directory(path: impl Into<String>) -> Self {
        Self::NoSuchDirectory { path: path.into() }
    }

    /// Creates a NoSuchFile error.
    pub fn no_such_file(name: impl Into<String>) -> Self {
        Self::NoSuchFile { name: name.into() }
    }

    /// Creates a NoSuchLink error.
    pub fn no_such_link(target: impl Into<String>) -> Self {
        Self::NoSuchLink {
            target: target.into(),
        }
    }

    /// Creates an EmptyInput error carrying the step-specific message.
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput(message.into())
    }

    /// Creates an InvalidField error.
    pub fn invalid_field(field: impl Into<String>, valid: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            valid: valid.into(),
        }
    }

    /// Creates a ProjectNotFound error listing the ids that do exist.
    pub fn project_not_found(id: impl Into<String>, available: &[String]) -> Self {
        Self::ProjectNotFound {
            id: id.into(),
            available: available.join(", "),
        }
    }

    /// Creates a StoreMutationFailed error.
    pub fn store_mutation(message: impl Into<String>) -> Self {
        Self::StoreMutationFailed(message.into())
    }

    /// Check if this is a not-found condition (directory, file, link, or project).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CommandNotFound { .. }
                | Self::NoSuchDirectory { .. }
                | Self::NoSuchFile { .. }
                | Self::NoSuchLink { .. }
                | Self::ProjectNotFound { .. }
        )
    }

    /// Check if an interactive flow can recover from this error by
    /// re-prompting the same step. Store failures abort the flow instead.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput(_)
                | Self::InvalidField { .. }
                | Self::InvalidConfirmation
                | Self::ProjectNotFound { .. }
        )
    }
}

impl From<std::io::Error> for TermError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TermError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TermError>`.
pub type Result<T> = std::result::Result<T, TermError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_terminal_wording() {
        assert_eq!(
            TermError::command_not_found("foo").to_string(),
            "command not found: foo"
        );
        assert_eq!(
            TermError::no_such_directory("bar").to_string(),
            "cd: bar: No such directory"
        );
        assert_eq!(
            TermError::no_such_file("x.txt").to_string(),
            "cat: x.txt: No such file"
        );
        assert_eq!(
            TermError::no_such_link("y.link").to_string(),
            "open: y.link: No such file or link"
        );
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(TermError::empty_input("x").is_recoverable());
        assert!(TermError::InvalidConfirmation.is_recoverable());
        assert!(TermError::project_not_found("a", &["b".to_string()]).is_recoverable());
        assert!(!TermError::store_mutation("gone").is_recoverable());
        assert!(!TermError::PermissionDenied.is_recoverable());
    }

    #[test]
    fn test_not_found_classification() {
        assert!(TermError::no_such_file("a").is_not_found());
        assert!(!TermError::PermissionDenied.is_not_found());
    }
}
