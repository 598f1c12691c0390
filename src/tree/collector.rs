//! TimelineCollector - rebuilds the visited subtree from pre-order visits

use crate::error::Result;
use crate::model::Category;
use crate::store::PostStore;

use super::node::TimelineNode;
use super::visitor::CategoryVisitor;

/// Visitor that collects each visited category and its posts into a
/// `TimelineNode` tree.
///
/// Relies on the walker's pre-order: a visit at depth `d` closes every open
/// node at depth `>= d` before it is pushed.
pub struct TimelineCollector<'a, P: PostStore + ?Sized> {
    posts: &'a P,
    max_posts: usize,
    open: Vec<TimelineNode>,
    root: Option<TimelineNode>,
}

impl<'a, P: PostStore + ?Sized> TimelineCollector<'a, P> {
    pub fn new(posts: &'a P, max_posts: usize) -> Self {
        Self {
            posts,
            max_posts,
            open: Vec::new(),
            root: None,
        }
    }

    /// The collected tree, or `None` if nothing was visited.
    pub fn finish(mut self) -> Option<TimelineNode> {
        self.close_to(0);
        self.root
    }

    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            let Some(node) = self.open.pop() else { break };
            match self.open.last_mut() {
                Some(parent) => parent.children.push(node),
                None => self.root = Some(node),
            }
        }
    }
}

impl<P: PostStore + ?Sized> CategoryVisitor for TimelineCollector<'_, P> {
    fn visit(&mut self, category: &Category, depth: usize) -> Result<()> {
        self.close_to(depth);
        let posts = self
            .posts
            .list_by_category(category.id, self.max_posts)?
            .into_iter()
            .map(Into::into)
            .collect();
        self.open.push(TimelineNode {
            id: category.id,
            name: category.name.clone(),
            depth,
            posts,
            children: Vec::new(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CategoryStore;
    use crate::test_utils::SiteBuilder;
    use crate::tree::{TreeWalker, WalkerConfig};

    #[test]
    fn test_collects_nested_tree() {
        let site = SiteBuilder::new()
            .category(1, "Timeline", None)
            .category(2, "1990s", Some(1))
            .category(3, "1999", Some(2))
            .category(4, "2000s", Some(1))
            .post(10, "Launch", "/launch", &[2])
            .post(11, "Party", "/party", &[3])
            .build();
        let root = site.find_by_name("Timeline").unwrap().unwrap();

        let mut collector = TimelineCollector::new(&site, 32);
        TreeWalker::new(&site, WalkerConfig::unbounded())
            .walk(&root, &mut collector)
            .unwrap();
        let tree = collector.finish().unwrap();

        assert_eq!(tree.name, "Timeline");
        assert_eq!(tree.category_count(), 4);
        assert_eq!(tree.post_count(), 2);

        let names: Vec<_> = tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["1990s", "2000s"]);

        let nineties = &tree.children[0];
        assert_eq!(nineties.depth, 1);
        assert_eq!(nineties.posts[0].title, "Launch");
        assert_eq!(nineties.children[0].name, "1999");
        assert_eq!(nineties.children[0].depth, 2);
        assert!(tree.children[1].children.is_empty());
    }

    #[test]
    fn test_post_cap_applies_per_category() {
        let site = SiteBuilder::new()
            .category(1, "Timeline", None)
            .posts_in(1, 5)
            .build();
        let root = site.find_by_name("Timeline").unwrap().unwrap();

        let mut collector = TimelineCollector::new(&site, 3);
        TreeWalker::new(&site, WalkerConfig::default())
            .walk(&root, &mut collector)
            .unwrap();
        assert_eq!(collector.finish().unwrap().posts.len(), 3);
    }

    #[test]
    fn test_nothing_visited() {
        let site = SiteBuilder::new().build();
        let collector = TimelineCollector::new(&site, 32);
        assert!(collector.finish().is_none());
    }
}
