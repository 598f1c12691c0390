//! Serializable timeline tree, built in memory for JSON output

use serde::Serialize;

use crate::model::{CategoryId, Post};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePost {
    pub title: String,
    pub permalink: String,
}

impl From<Post> for TimelinePost {
    fn from(post: Post) -> Self {
        Self {
            title: post.title,
            permalink: post.permalink,
        }
    }
}

/// One visited category with its bounded post list and visited children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineNode {
    pub id: CategoryId,
    pub name: String,
    pub depth: usize,
    pub posts: Vec<TimelinePost>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TimelineNode>,
}

impl TimelineNode {
    /// Number of categories in this subtree, including this one.
    pub fn category_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TimelineNode::category_count)
            .sum::<usize>()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
            + self
                .children
                .iter()
                .map(TimelineNode::post_count)
                .sum::<usize>()
    }
}
