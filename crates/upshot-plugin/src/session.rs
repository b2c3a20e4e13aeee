//! Host session access.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Session-related errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session has no backing file yet.
    #[error("the session has never been saved")]
    NeverSaved,

    /// The session file does not exist.
    #[error("session file not found: {0}")]
    NotFound(PathBuf),

    /// Saving the session failed.
    #[error("failed to save session to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// The host application's currently open document.
///
/// Plugins only read session state; the one mutation they are allowed is
/// commanding a save-as during their publish stage.
pub trait Session: Send + Sync {
    /// Current file path, or `None` if the session has never been saved.
    fn path(&self) -> Option<PathBuf>;

    /// Whether the session holds modifications not yet written to disk.
    fn has_unsaved_changes(&self) -> bool;

    /// Saves the session under the given path and makes that path current.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has never been saved or if writing
    /// the new file fails.
    fn save(&self, path: &Path) -> SessionResult<()>;
}
