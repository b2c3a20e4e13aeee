//! Session adapter for Upshot.
//!
//! This crate provides [`FileSession`], a [`Session`] implementation backed
//! by a plain file on disk. Embedders inside a host application supply
//! their own implementation over the host's document API; `FileSession` is
//! what the CLI and integration tests run against.

mod file;

pub use file::FileSession;

pub use upshot_plugin::{Session, SessionError, SessionResult};
