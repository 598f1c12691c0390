//! Category and post records read from the host stores

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a category, unique within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the host's category taxonomy.
///
/// The name is what admins pick in the settings form, so it acts as the lookup
/// key even though the host does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<CategoryId>,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>, parent: Option<u64>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
            parent: parent.map(CategoryId),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub permalink: String,
    /// Categories this post is filed under.
    #[serde(default)]
    pub categories: Vec<CategoryId>,
}

impl Post {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        permalink: impl Into<String>,
        categories: &[u64],
    ) -> Self {
        Self {
            id: PostId(id),
            title: title.into(),
            permalink: permalink.into(),
            categories: categories.iter().copied().map(CategoryId).collect(),
        }
    }

    pub fn in_category(&self, id: CategoryId) -> bool {
        self.categories.contains(&id)
    }
}
