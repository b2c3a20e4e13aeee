//! Plugin system for Upshot.
//!
//! This crate provides the plugin contract and supporting types:
//! - [`Plugin`]: Base trait for all plugins
//! - [`PublishPlugin`]: Publish lifecycle contract (accept/validate/publish/finalize)
//! - [`PublishItem`]: Per-pass item context
//! - [`Session`]: Host application document access
//! - [`LogRecord`]: Structured diagnostics with optional UI actions

mod error;
mod item;
mod log;
mod session;
mod settings;
mod traits;

pub use error::{PluginError, PluginResult};
pub use item::PublishItem;
pub use log::{ButtonCommand, LogAction, LogLevel, LogRecord};
pub use session::{Session, SessionError, SessionResult};
pub use settings::{SettingSpec, Settings, SettingsSpec};
pub use traits::Plugin;
pub use traits::publish::{Acceptance, PublishPlugin};
