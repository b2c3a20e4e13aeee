//! Version-up publish plugin.
//!
//! Detects the version number in the session file name and saves the
//! session to the next available version. The plugin accepts the session
//! unconditionally so the task stays visible while the user fixes a
//! blocking condition; the default checkbox state tracks whether the pass
//! would succeed right now.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use upshot_core::{get_next_version_path, get_version_number, normalize};
use upshot_plugin::{
    Acceptance, ButtonCommand, LogAction, Plugin, PluginError, PluginResult, PublishItem,
    PublishPlugin, Session, Settings,
};

const DEFAULT_VERSION_DOCS_URL: &str =
    "https://docs.upshot-pipeline.dev/guides/version-numbers";

/// Saves the current session to the next version of its file name.
pub struct VersionUpPlugin {
    session: Arc<dyn Session>,
    docs_url: String,
}

/// Classification shared by accept and validate, derived fresh from live
/// session state on every call.
enum SessionState {
    /// Unsaved changes, or never saved at all.
    Blocked,
    /// Saved, but no version token in the file name.
    Unversioned,
    /// Saved with a version token; the path is normalized.
    Versioned { path: PathBuf, version: u32 },
}

impl VersionUpPlugin {
    /// Creates the plugin over the given session.
    #[must_use]
    pub fn new(session: Arc<dyn Session>) -> Self {
        Self {
            session,
            docs_url: DEFAULT_VERSION_DOCS_URL.to_string(),
        }
    }

    /// Overrides the documentation URL offered when no version is detected.
    #[must_use]
    pub fn with_docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = url.into();
        self
    }

    fn check_session(&self) -> SessionState {
        let Some(path) = self.session.path() else {
            return SessionState::Blocked;
        };
        if path.as_os_str().is_empty() || self.session.has_unsaved_changes() {
            return SessionState::Blocked;
        }

        let path = normalize(&path);
        match get_version_number(&path) {
            Some(version) => {
                debug!(path = %path.display(), version, "version token detected");
                SessionState::Versioned { path, version }
            }
            None => SessionState::Unversioned,
        }
    }

    fn save_action(&self) -> LogAction {
        LogAction::Button {
            label: "Save".to_string(),
            tooltip: "Save the current session".to_string(),
            command: ButtonCommand::SaveSession,
        }
    }

    fn version_docs_action(&self) -> LogAction {
        LogAction::OpenUrl {
            label: "Version Docs".to_string(),
            tooltip: "Show docs for version formats".to_string(),
            url: self.docs_url.clone(),
        }
    }
}

impl Plugin for VersionUpPlugin {
    fn name(&self) -> &'static str {
        "version-up"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Detects the version number in the session file name and saves the \
         session to the next available version"
    }

    fn icon(&self) -> Option<&'static str> {
        Some("icons/version_up.png")
    }
}

impl PublishPlugin for VersionUpPlugin {
    fn item_filters(&self) -> Vec<String> {
        vec!["houdini.session".to_string()]
    }

    fn accept(&self, _settings: &Settings, item: &mut PublishItem) -> Acceptance {
        // The item is accepted regardless of current state; the session can
        // still be saved under a different name while the publisher is
        // open. Blocking conditions only uncheck the task by default.
        let checked = match self.check_session() {
            SessionState::Blocked => {
                item.warn("Unsaved changes in the session", Some(self.save_action()));
                false
            }
            SessionState::Unversioned => {
                item.warn(
                    "No version number detected in the file name",
                    Some(self.version_docs_action()),
                );
                false
            }
            SessionState::Versioned { .. } => true,
        };

        item.info("Version-up plugin accepted the current session");

        Acceptance::accept().with_checked(checked)
    }

    fn validate(&self, _settings: &Settings, item: &mut PublishItem) -> bool {
        let path = match self.check_session() {
            SessionState::Blocked => {
                item.error("Unsaved changes in the session", Some(self.save_action()));
                return false;
            }
            SessionState::Unversioned => {
                item.error(
                    "No version number detected in the file name",
                    Some(self.version_docs_action()),
                );
                return false;
            }
            SessionState::Versioned { path, .. } => path,
        };

        let Some(next_version_path) = get_next_version_path(&path) else {
            item.error("Could not determine the next version path", None);
            return false;
        };

        if next_version_path.exists() {
            item.error(
                format!("Next version already exists: {}", next_version_path.display()),
                Some(LogAction::ShowFolder {
                    path: next_version_path,
                }),
            );
            return false;
        }

        item.set_next_version_path(next_version_path);
        true
    }

    fn publish(&self, _settings: &Settings, item: &mut PublishItem) -> PluginResult<()> {
        let next_version_path = item
            .next_version_path()
            .ok_or(PluginError::MissingNextVersionPath)?
            .to_path_buf();

        self.session.save(&next_version_path)?;
        item.info("The session is now at the next version");
        Ok(())
    }
}
