//! Structured diagnostics with optional UI actions.
//!
//! Plugins report progress and problems as [`LogRecord`]s collected on the
//! item being published. A record may carry one [`LogAction`] the embedding
//! UI can render next to the message (a button, a documentation link, or a
//! reveal-in-file-browser shortcut). Records are data; they never influence
//! control flow.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Progress information.
    Info,
    /// A condition the user can fix; does not block by itself.
    Warning,
    /// A condition that blocks the publish pass.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Command bound to an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonCommand {
    /// Ask the host to save the current session interactively.
    SaveSession,
}

/// A UI action attached to a diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogAction {
    /// A button rendered next to the message.
    Button {
        label: String,
        tooltip: String,
        command: ButtonCommand,
    },
    /// A link to external documentation.
    OpenUrl {
        label: String,
        tooltip: String,
        url: String,
    },
    /// Reveal the given path in the platform file browser.
    ShowFolder { path: PathBuf },
}

/// One diagnostic record emitted during a publish pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Record severity.
    pub level: LogLevel,

    /// Human-readable message.
    pub message: String,

    /// Optional UI action offered alongside the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<LogAction>,
}

impl LogRecord {
    /// Creates a record at the given level.
    #[must_use]
    pub fn new(level: LogLevel, message: impl Into<String>, action: Option<LogAction>) -> Self {
        Self {
            level,
            message: message.into(),
            action,
        }
    }
}
