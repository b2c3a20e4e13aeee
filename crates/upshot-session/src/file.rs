//! Disk-backed session.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use upshot_plugin::{Session, SessionError, SessionResult};

#[derive(Debug)]
struct State {
    path: Option<PathBuf>,
    unsaved_changes: bool,
}

/// A session backed by a file on disk.
///
/// `save` copies the current file to the new path and repoints the session
/// at it, the way a host application's save-as leaves the new file open.
#[derive(Debug)]
pub struct FileSession {
    state: Mutex<State>,
}

impl FileSession {
    /// Opens a session over an existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> SessionResult<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(SessionError::NotFound(path));
        }

        Ok(Self {
            state: Mutex::new(State {
                path: Some(path),
                unsaved_changes: false,
            }),
        })
    }

    /// Creates a session that has never been saved.
    #[must_use]
    pub fn unsaved() -> Self {
        Self {
            state: Mutex::new(State {
                path: None,
                unsaved_changes: true,
            }),
        }
    }

    /// Marks the session as holding modifications not yet on disk.
    pub fn mark_unsaved_changes(&self) {
        self.state.lock().expect("session state lock poisoned").unsaved_changes = true;
    }
}

impl Session for FileSession {
    fn path(&self) -> Option<PathBuf> {
        self.state.lock().expect("session state lock poisoned").path.clone()
    }

    fn has_unsaved_changes(&self) -> bool {
        self.state.lock().expect("session state lock poisoned").unsaved_changes
    }

    fn save(&self, path: &Path) -> SessionResult<()> {
        let mut state = self.state.lock().expect("session state lock poisoned");

        let Some(current) = state.path.clone() else {
            return Err(SessionError::NeverSaved);
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SessionError::SaveFailed {
                path: path.to_path_buf(),
                source,
            })?;
        }

        fs::copy(&current, path).map_err(|source| SessionError::SaveFailed {
            path: path.to_path_buf(),
            source,
        })?;

        state.path = Some(path.to_path_buf());
        state.unsaved_changes = false;
        Ok(())
    }
}
