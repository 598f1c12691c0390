//! Host store contracts
//!
//! The widget never owns categories, posts or its own settings. Everything is
//! read from (and saved to) the stores defined here:
//!
//! - `CategoryStore` - category lookup and child listing
//! - `PostStore` - posts filed under a category, bounded by a count
//! - `InstanceStore` - persisted per-instance widget settings
//! - `OptionStore` - the host's global option table
//!
//! `Site` and `JsonInstanceStore` are the in-process implementations used by
//! the CLI and the tests.

mod instances;
mod site;

pub use instances::JsonInstanceStore;
pub use site::Site;

use crate::error::Result;
use crate::model::{Category, CategoryId, Post};
use crate::widget::InstanceRecord;

pub trait CategoryStore {
    /// Every category, in store order.
    fn list_all(&self) -> Result<Vec<Category>>;

    /// Direct children of `parent`, in store order. Empty for a leaf.
    fn list_children(&self, parent: CategoryId) -> Result<Vec<Category>>;

    /// First category whose name matches exactly.
    fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        Ok(self.list_all()?.into_iter().find(|cat| cat.name == name))
    }
}

pub trait PostStore {
    /// Posts filed under `category`, in store order, at most `limit` of them.
    fn list_by_category(&self, category: CategoryId, limit: usize) -> Result<Vec<Post>>;
}

pub trait InstanceStore {
    fn load(&self, number: u32) -> Result<Option<InstanceRecord>>;

    fn save(&mut self, number: u32, record: &InstanceRecord) -> Result<()>;

    /// Drop the settings of an instance removed from the host.
    fn remove(&mut self, number: u32) -> Result<()>;
}

pub trait OptionStore {
    fn get(&self, key: &str) -> Option<String>;

    fn delete(&mut self, key: &str) -> bool;
}

impl OptionStore for std::collections::BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        std::collections::BTreeMap::get(self, key).cloned()
    }

    fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }
}
