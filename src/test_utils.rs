//! Test utilities for building sites and site documents on disk.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::model::{Category, Post};
use crate::store::Site;

/// Fluent builder for in-memory sites.
#[derive(Default)]
pub struct SiteBuilder {
    categories: Vec<Category>,
    posts: Vec<Post>,
    next_post_id: u64,
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self {
            next_post_id: 1_000,
            ..Default::default()
        }
    }

    pub fn category(mut self, id: u64, name: &str, parent: Option<u64>) -> Self {
        self.categories.push(Category::new(id, name, parent));
        self
    }

    pub fn post(mut self, id: u64, title: &str, permalink: &str, categories: &[u64]) -> Self {
        self.posts.push(Post::new(id, title, permalink, categories));
        self
    }

    /// Add `count` generated posts filed under `category`.
    pub fn posts_in(mut self, category: u64, count: usize) -> Self {
        for _ in 0..count {
            let id = self.next_post_id;
            self.next_post_id += 1;
            self.posts.push(Post::new(
                id,
                format!("Post {}", id),
                format!("https://example.com/?p={}", id),
                &[category],
            ));
        }
        self
    }

    /// A complete tree with `fanout` children per category, `levels` deep
    /// below the root, and `posts` posts per category.
    pub fn balanced(levels: usize, fanout: usize, posts: usize) -> Self {
        let mut builder = Self::new().category(1, "Timeline", None).posts_in(1, posts);
        let mut frontier = vec![1u64];
        let mut next_id = 2u64;
        for level in 1..=levels {
            let mut next_frontier = Vec::new();
            for parent in frontier {
                for i in 0..fanout {
                    let id = next_id;
                    next_id += 1;
                    builder = builder
                        .category(id, &format!("L{}-{}-{}", level, parent, i), Some(parent))
                        .posts_in(id, posts);
                    next_frontier.push(id);
                }
            }
            frontier = next_frontier;
        }
        builder
    }

    pub fn build(self) -> Site {
        Site::new(self.categories, self.posts).expect("Invalid test site")
    }
}

/// A temporary directory holding a site document and an instance store file.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    pub fn new(site: &Site) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let json = serde_json::to_string_pretty(site).expect("Failed to serialize site");
        fs::write(dir.path().join("site.json"), json).expect("Failed to write site");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn site_path(&self) -> PathBuf {
        self.dir.path().join("site.json")
    }

    pub fn instances_path(&self) -> PathBuf {
        self.dir.path().join("instances.json")
    }

    /// Write raw contents to a file in the directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }
}
