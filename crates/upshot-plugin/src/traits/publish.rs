//! Publish plugin lifecycle trait.

use serde::{Deserialize, Serialize};

use super::Plugin;
use crate::{PluginResult, PublishItem, Settings, SettingsSpec};

/// UI state returned by [`PublishPlugin::accept`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acceptance {
    /// Whether the plugin is interested in the item at all.
    pub accepted: bool,

    /// Whether the task can be toggled in the UI.
    pub enabled: bool,

    /// Whether the task is shown in the UI.
    pub visible: bool,

    /// The default checkbox state; encodes "would succeed right now".
    pub checked: bool,
}

impl Acceptance {
    /// Accepts the item with all UI flags on.
    #[must_use]
    pub fn accept() -> Self {
        Self {
            accepted: true,
            enabled: true,
            visible: true,
            checked: true,
        }
    }

    /// Declines the item entirely.
    #[must_use]
    pub fn reject() -> Self {
        Self {
            accepted: false,
            enabled: false,
            visible: false,
            checked: false,
        }
    }

    /// Sets the default checkbox state.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Lifecycle contract a publish plugin implements.
///
/// The pipeline drives the four stages in strict order for each item:
/// 1. `accept` - offered for every item matching the filters; may be called
///    repeatedly as the UI refreshes
/// 2. `validate` - once per pass, for checked tasks
/// 3. `publish` - once per pass, only after the most recent `validate`
///    returned `true`
/// 4. `finalize` - once per pass, after all publish stages completed
#[allow(unused_variables)]
pub trait PublishPlugin: Plugin {
    /// Item types this plugin wants to be offered.
    ///
    /// Entries are matched against the item type exactly, or as a prefix
    /// when they end in `*` (e.g. `"houdini.*"`).
    fn item_filters(&self) -> Vec<String>;

    /// The settings this plugin declares. Defaults to none.
    fn settings(&self) -> SettingsSpec {
        SettingsSpec::new()
    }

    /// Decides whether the plugin is interested in the item and what the
    /// default UI state should be.
    ///
    /// Must be re-derived from live state on every call; the pipeline may
    /// invoke it many times before a pass runs.
    fn accept(&self, settings: &Settings, item: &mut PublishItem) -> Acceptance;

    /// Checks that the item can be published right now.
    ///
    /// Returning `false` is the normal way to report an anticipated
    /// problem; diagnostics go on the item as error records.
    fn validate(&self, settings: &Settings, item: &mut PublishItem) -> bool;

    /// Performs the publish step.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying operation fails; the pipeline
    /// aborts the pass and reports it.
    fn publish(&self, settings: &Settings, item: &mut PublishItem) -> PluginResult<()>;

    /// Post-publish bookkeeping. Defaults to a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if finalization fails.
    fn finalize(&self, settings: &Settings, item: &mut PublishItem) -> PluginResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal plugin that uses the defaulted stages
    struct MinimalPublish;

    impl Plugin for MinimalPublish {
        fn name(&self) -> &'static str {
            "minimal-publish"
        }
        fn version(&self) -> &'static str {
            "1.0.0"
        }
    }

    impl PublishPlugin for MinimalPublish {
        fn item_filters(&self) -> Vec<String> {
            vec!["*".to_string()]
        }

        fn accept(&self, _settings: &Settings, _item: &mut PublishItem) -> Acceptance {
            Acceptance::accept()
        }

        fn validate(&self, _settings: &Settings, _item: &mut PublishItem) -> bool {
            true
        }

        fn publish(&self, _settings: &Settings, _item: &mut PublishItem) -> PluginResult<()> {
            Ok(())
        }
    }

    fn create_test_item() -> PublishItem {
        PublishItem::new("houdini.session", "current session")
    }

    #[test]
    fn test_acceptance_accept() {
        let acceptance = Acceptance::accept();
        assert!(acceptance.accepted);
        assert!(acceptance.enabled);
        assert!(acceptance.visible);
        assert!(acceptance.checked);
    }

    #[test]
    fn test_acceptance_reject() {
        let acceptance = Acceptance::reject();
        assert!(!acceptance.accepted);
        assert!(!acceptance.checked);
    }

    #[test]
    fn test_acceptance_with_checked() {
        let acceptance = Acceptance::accept().with_checked(false);
        assert!(acceptance.accepted);
        assert!(!acceptance.checked);
    }

    #[test]
    fn test_default_settings_empty() {
        let plugin = MinimalPublish;
        assert!(plugin.settings().is_empty());
    }

    #[test]
    fn test_default_finalize() {
        let plugin = MinimalPublish;
        let mut item = create_test_item();
        assert!(plugin.finalize(&Settings::new(), &mut item).is_ok());
    }

    #[test]
    fn test_lifecycle_order_by_hand() {
        let plugin = MinimalPublish;
        let settings = Settings::new();
        let mut item = create_test_item();

        let acceptance = plugin.accept(&settings, &mut item);
        assert!(acceptance.accepted);
        assert!(plugin.validate(&settings, &mut item));
        assert!(plugin.publish(&settings, &mut item).is_ok());
        assert!(plugin.finalize(&settings, &mut item).is_ok());
    }
}
