//! CLI subcommands.

pub mod check;
pub mod up;

use std::path::Path;
use std::sync::Arc;

use upshot_core::{PassReport, Pipeline};
use upshot_plugin::{LogAction, LogRecord, PublishItem, Session};
use upshot_version_up::VersionUpPlugin;

/// Item type the CLI publishes; sessions here are plain files on disk.
pub(crate) const SESSION_ITEM_TYPE: &str = "houdini.session";

/// Builds the pipeline with the shipped plugins.
pub(crate) fn publish_pipeline(session: Arc<dyn Session>) -> Pipeline {
    Pipeline::new().with_plugin(Box::new(VersionUpPlugin::new(session)))
}

/// Builds the publish item for a session file.
pub(crate) fn session_item(file: &Path) -> PublishItem {
    let name = file
        .file_name()
        .map_or_else(|| file.display().to_string(), |n| n.to_string_lossy().into_owned());
    PublishItem::new(SESSION_ITEM_TYPE, name)
}

/// Prints the pass reports for human consumption.
pub(crate) fn render_reports(reports: &[PassReport]) {
    for report in reports {
        for record in &report.records {
            render_record(record);
        }
    }
}

fn render_record(record: &LogRecord) {
    println!("[{}] {}", record.level, record.message);
    match &record.action {
        Some(LogAction::Button { label, tooltip, .. }) => {
            println!("          [{label}] {tooltip}");
        }
        Some(LogAction::OpenUrl { label, url, .. }) => {
            println!("          [{label}] {url}");
        }
        Some(LogAction::ShowFolder { path }) => {
            println!("          [Show Folder] {}", path.display());
        }
        None => {}
    }
}
