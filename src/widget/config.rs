//! Persisted widget settings

use std::collections::BTreeMap;

use crate::tree::{DEFAULT_MAX_DEPTH, WalkerConfig};

/// Raw key/value settings of one widget instance, as the host persists them.
pub type InstanceRecord = BTreeMap<String, String>;

pub const TITLE_KEY: &str = "title";
pub const CATEGORY_KEY: &str = "cat";
pub const MAX_DEPTH_KEY: &str = "maxcatdepth";

/// Typed settings of a widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub title: String,
    /// Name of the category the timeline starts at.
    pub root_category: String,
    /// Deepest level shown below the root. `-1` shows the whole subtree.
    pub max_depth: i64,
}

impl WidgetConfig {
    /// Fill in defaults for missing or malformed fields.
    pub fn from_instance(instance: &InstanceRecord) -> Self {
        let text = |key: &str| instance.get(key).cloned().unwrap_or_default();
        let max_depth = instance
            .get(MAX_DEPTH_KEY)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_MAX_DEPTH as i64);

        Self {
            title: text(TITLE_KEY),
            root_category: text(CATEGORY_KEY),
            max_depth,
        }
    }

    pub fn to_instance(&self) -> InstanceRecord {
        let mut record = InstanceRecord::new();
        record.insert(TITLE_KEY.to_string(), self.title.clone());
        record.insert(CATEGORY_KEY.to_string(), self.root_category.clone());
        record.insert(MAX_DEPTH_KEY.to_string(), self.max_depth.to_string());
        record
    }

    /// Walker bound for this instance, or `None` when the stored depth leaves
    /// nothing to visit.
    pub fn walker_config(&self) -> Option<WalkerConfig> {
        WalkerConfig::from_stored_depth(self.max_depth)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::from_instance(&InstanceRecord::new())
    }
}
