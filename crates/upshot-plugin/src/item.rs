//! Publish item context.

use std::path::{Path, PathBuf};

use crate::log::{LogAction, LogLevel, LogRecord};

/// One unit of publishable content passed through a publish pass.
///
/// The item is created by the pipeline, offered to plugins, and dropped at
/// the end of the pass. Plugins communicate through it in two ways: the
/// diagnostic records they emit, and the single derived field
/// [`next_version_path`](Self::next_version_path), written during validate
/// and read during publish.
#[derive(Debug)]
pub struct PublishItem {
    item_type: String,
    name: String,
    next_version_path: Option<PathBuf>,
    records: Vec<LogRecord>,
}

impl PublishItem {
    /// Creates a new item of the given type.
    #[must_use]
    pub fn new(item_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            name: name.into(),
            next_version_path: None,
            records: Vec::new(),
        }
    }

    /// The item type plugins filter on (e.g. `"houdini.session"`).
    #[must_use]
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// Display name of the item.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The path the next publish should save to, once validation set it.
    #[must_use]
    pub fn next_version_path(&self) -> Option<&Path> {
        self.next_version_path.as_deref()
    }

    /// Records the path the publish stage should save to.
    pub fn set_next_version_path(&mut self, path: impl Into<PathBuf>) {
        self.next_version_path = Some(path.into());
    }

    /// Diagnostic records collected so far.
    #[must_use]
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Drains the collected records, leaving the item empty.
    pub fn take_records(&mut self) -> Vec<LogRecord> {
        std::mem::take(&mut self.records)
    }

    /// Emits an informational record.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Info, message.into(), None);
    }

    /// Emits a warning record with an optional UI action.
    pub fn warn(&mut self, message: impl Into<String>, action: Option<LogAction>) {
        self.push(LogLevel::Warning, message.into(), action);
    }

    /// Emits an error record with an optional UI action.
    pub fn error(&mut self, message: impl Into<String>, action: Option<LogAction>) {
        self.push(LogLevel::Error, message.into(), action);
    }

    fn push(&mut self, level: LogLevel, message: String, action: Option<LogAction>) {
        // Mirror to tracing so records show up in regular log output too.
        match level {
            LogLevel::Info => tracing::info!(item = %self.name, "{message}"),
            LogLevel::Warning => tracing::warn!(item = %self.name, "{message}"),
            LogLevel::Error => tracing::error!(item = %self.name, "{message}"),
        }
        self.records.push(LogRecord::new(level, message, action));
    }
}
