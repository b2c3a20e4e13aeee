//! Plugin error types.

use thiserror::Error;

use crate::session::SessionError;

/// Plugin-related errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Publish was invoked without a preceding successful validate.
    #[error("no next version path on the item; validate must succeed before publish")]
    MissingNextVersionPath,

    /// Plugin execution failed.
    #[error("plugin execution failed: {0}")]
    ExecutionFailed(String),

    /// Session operation failed.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_next_version_path_display() {
        let err = PluginError::MissingNextVersionPath;
        assert_eq!(
            err.to_string(),
            "no next version path on the item; validate must succeed before publish"
        );
    }

    #[test]
    fn test_execution_failed_display() {
        let err = PluginError::ExecutionFailed("crash".to_string());
        assert_eq!(err.to_string(), "plugin execution failed: crash");
    }

    #[test]
    fn test_session_error_display() {
        let err = PluginError::from(SessionError::NeverSaved);
        assert_eq!(err.to_string(), "session error: the session has never been saved");
    }

    #[test]
    fn test_error_is_debug() {
        let err = PluginError::MissingNextVersionPath;
        let debug = format!("{err:?}");
        assert!(debug.contains("MissingNextVersionPath"));
    }

    #[test]
    fn test_plugin_result_ok() {
        let result: PluginResult<i32> = Ok(42);
        assert!(result.is_ok());
        assert_eq!(result.ok(), Some(42));
    }

    #[test]
    fn test_plugin_result_err() {
        let result: PluginResult<i32> = Err(PluginError::MissingNextVersionPath);
        assert!(result.is_err());
    }
}
