//! Publish pass execution.

use serde::Serialize;
use tracing::info;
use upshot_plugin::{Acceptance, LogRecord, PluginResult, PublishItem, PublishPlugin, Settings};

/// Outcome of one plugin over one item.
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    /// Plugin name.
    pub plugin: String,

    /// The UI state the plugin returned from accept.
    pub acceptance: Acceptance,

    /// Validation outcome; `None` when the stage never ran.
    pub validated: Option<bool>,

    /// Whether the publish stage ran to completion.
    pub published: bool,

    /// Diagnostic records the plugin emitted on the item.
    pub records: Vec<LogRecord>,
}

/// Orchestrates publish plugins over items.
///
/// Each plugin whose item filters match is offered the item through
/// `accept`; checked tasks then run `validate`, `publish`, and `finalize`
/// in strict order. `accept` may run many times across UI refreshes, the
/// other stages at most once per pass.
pub struct Pipeline {
    plugins: Vec<Box<dyn PublishPlugin>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self { plugins: Vec::new() }
    }

    /// Adds a publish plugin.
    #[must_use]
    pub fn with_plugin(mut self, plugin: Box<dyn PublishPlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Returns the registered plugins.
    pub fn plugins(&self) -> &[Box<dyn PublishPlugin>] {
        &self.plugins
    }

    /// Runs accept and validate only; nothing is published.
    ///
    /// Unchecked tasks are reported without a validation outcome.
    pub fn check(&self, settings: &Settings, item: &mut PublishItem) -> Vec<PassReport> {
        let mut reports = Vec::new();

        for plugin in &self.plugins {
            if !offered(plugin.as_ref(), item) {
                continue;
            }

            let acceptance = plugin.accept(settings, item);
            let validated = (acceptance.accepted && acceptance.checked)
                .then(|| plugin.validate(settings, item));

            reports.push(PassReport {
                plugin: plugin.name().to_string(),
                acceptance,
                validated,
                published: false,
                records: item.take_records(),
            });
        }

        reports
    }

    /// Runs a full publish pass.
    ///
    /// Tasks whose validation fails are reported, not errors. Unchecked
    /// tasks are skipped past accept.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a publish or finalize stage; the
    /// pass is aborted at that point.
    pub fn run(&self, settings: &Settings, item: &mut PublishItem) -> PluginResult<Vec<PassReport>> {
        let mut reports = Vec::new();

        for plugin in &self.plugins {
            if !offered(plugin.as_ref(), item) {
                continue;
            }

            let acceptance = plugin.accept(settings, item);
            if !(acceptance.accepted && acceptance.checked) {
                reports.push(PassReport {
                    plugin: plugin.name().to_string(),
                    acceptance,
                    validated: None,
                    published: false,
                    records: item.take_records(),
                });
                continue;
            }

            let validated = plugin.validate(settings, item);
            let mut published = false;
            if validated {
                plugin.publish(settings, item)?;
                published = true;
                plugin.finalize(settings, item)?;
            }

            reports.push(PassReport {
                plugin: plugin.name().to_string(),
                acceptance,
                validated: Some(validated),
                published,
                records: item.take_records(),
            });
        }

        Ok(reports)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn offered(plugin: &dyn PublishPlugin, item: &PublishItem) -> bool {
    let interested = plugin
        .item_filters()
        .iter()
        .any(|filter| matches_filter(filter, item.item_type()));

    if !interested {
        info!(
            plugin = plugin.name(),
            item_type = item.item_type(),
            "item type not of interest, skipping plugin"
        );
    }

    interested
}

/// Matches an item type against a filter: exact, or prefix when the filter
/// ends in `*` (e.g. `"houdini.*"`).
fn matches_filter(filter: &str, item_type: &str) -> bool {
    if let Some(prefix) = filter.strip_suffix('*') {
        item_type.starts_with(prefix)
    } else {
        filter == item_type
    }
}
