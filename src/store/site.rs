//! In-memory category and post store backed by a JSON site document

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TimelineError};
use crate::model::{Category, CategoryId, Post};

use super::{CategoryStore, PostStore};

/// A snapshot of a site's taxonomy and posts.
///
/// Children and posts come back in document order, the same way the host
/// returns them in its default ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Site {
    /// Build a site, rejecting duplicate ids and dangling parent links.
    pub fn new(categories: Vec<Category>, posts: Vec<Post>) -> Result<Self> {
        let site = Self { categories, posts };
        site.validate()?;
        Ok(site)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let site: Site = serde_json::from_str(json)?;
        site.validate()?;
        Ok(site)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading site document {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.id == id)
    }

    // Cycles are not rejected: the walker's depth bound is the only guard.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for cat in &self.categories {
            if !seen.insert(cat.id) {
                return Err(TimelineError::InvalidSite(format!(
                    "duplicate category id {}",
                    cat.id
                )));
            }
        }
        if let Some(parent) = self
            .categories
            .iter()
            .filter_map(|cat| cat.parent)
            .find(|parent| !seen.contains(parent))
        {
            return Err(TimelineError::UnknownCategory(parent.0));
        }

        let mut post_ids = HashSet::new();
        for post in &self.posts {
            if !post_ids.insert(post.id) {
                return Err(TimelineError::InvalidSite(format!(
                    "duplicate post id {}",
                    post.id
                )));
            }
        }
        Ok(())
    }
}

impl CategoryStore for Site {
    fn list_all(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn list_children(&self, parent: CategoryId) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .iter()
            .filter(|cat| cat.parent == Some(parent))
            .cloned()
            .collect())
    }
}

impl PostStore for Site {
    fn list_by_category(&self, category: CategoryId, limit: usize) -> Result<Vec<Post>> {
        Ok(self
            .posts
            .iter()
            .filter(|post| post.in_category(category))
            .take(limit)
            .cloned()
            .collect())
    }
}
