//! HTML renderer for a single visited category
//!
//! `NodeRenderer` is the visitor the widget hands to the tree walker. For each
//! category it writes one label line, then one link line per post, each line
//! indented by padding proportional to its depth.

use std::io::Write;

use crate::error::Result;
use crate::model::{Category, Post};
use crate::store::PostStore;
use crate::tree::CategoryVisitor;

use super::config::RenderConfig;
use super::utils::escape_html;

pub struct NodeRenderer<'a, P: PostStore + ?Sized, W: Write> {
    posts: &'a P,
    config: RenderConfig,
    out: W,
}

impl<'a, P: PostStore + ?Sized, W: Write> NodeRenderer<'a, P, W> {
    pub fn new(posts: &'a P, config: RenderConfig, out: W) -> Self {
        Self { posts, config, out }
    }

    /// Write the label and post links of `category`.
    pub fn render(&mut self, category: &Category, depth: usize) -> Result<()> {
        let posts = self
            .posts
            .list_by_category(category.id, self.config.max_posts)?;

        self.write_label(category, depth)?;
        for post in &posts {
            self.write_post(post, depth + 1)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_label(&mut self, category: &Category, depth: usize) -> Result<()> {
        writeln!(
            self.out,
            "<span style='padding-left:{}{};'>{}</span><br/>",
            depth,
            self.config.indent_unit,
            escape_html(&category.name)
        )?;
        Ok(())
    }

    fn write_post(&mut self, post: &Post, depth: usize) -> Result<()> {
        writeln!(
            self.out,
            "<a href='{}' style='padding-left:{}{};'><span>{}</span></a><br/>",
            escape_html(&post.permalink),
            depth,
            self.config.indent_unit,
            escape_html(&post.title)
        )?;
        Ok(())
    }
}

impl<P: PostStore + ?Sized, W: Write> CategoryVisitor for NodeRenderer<'_, P, W> {
    fn visit(&mut self, category: &Category, depth: usize) -> Result<()> {
        self.render(category, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CategoryStore, Site};
    use crate::test_utils::SiteBuilder;

    fn render_one(site: &Site, name: &str, depth: usize) -> Vec<String> {
        let category = site.find_by_name(name).unwrap().unwrap();
        let mut renderer = NodeRenderer::new(site, RenderConfig::default(), Vec::new());
        renderer.render(&category, depth).unwrap();
        String::from_utf8(renderer.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_label_and_post_lines() {
        let site = SiteBuilder::new()
            .category(2, "1990s", None)
            .post(10, "Launch", "https://example.com/launch", &[2])
            .build();

        let lines = render_one(&site, "1990s", 1);
        assert_eq!(
            lines,
            vec![
                "<span style='padding-left:1em;'>1990s</span><br/>",
                "<a href='https://example.com/launch' style='padding-left:2em;'><span>Launch</span></a><br/>",
            ]
        );
    }

    #[test]
    fn test_category_without_posts_renders_only_label() {
        let site = SiteBuilder::new().category(1, "Empty", None).build();
        let lines = render_one(&site, "Empty", 0);
        assert_eq!(lines, vec!["<span style='padding-left:0em;'>Empty</span><br/>"]);
    }

    #[test]
    fn test_post_count_is_capped() {
        let site = SiteBuilder::new()
            .category(1, "Busy", None)
            .posts_in(1, 40)
            .build();
        assert_eq!(render_one(&site, "Busy", 0).len(), 1 + 32);

        let site = SiteBuilder::new()
            .category(1, "Some", None)
            .posts_in(1, 5)
            .build();
        assert_eq!(render_one(&site, "Some", 0).len(), 1 + 5);
    }

    #[test]
    fn test_custom_limit_and_unit() {
        let site = SiteBuilder::new()
            .category(1, "Busy", None)
            .posts_in(1, 4)
            .build();
        let category = site.find_by_name("Busy").unwrap().unwrap();
        let config = RenderConfig {
            max_posts: 2,
            indent_unit: "rem".to_string(),
        };
        let mut renderer = NodeRenderer::new(&site, config, Vec::new());
        renderer.render(&category, 3).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("<span style='padding-left:3rem;'>"));
        assert!(out.contains("padding-left:4rem;"));
    }

    #[test]
    fn test_text_is_escaped() {
        let site = SiteBuilder::new()
            .category(1, "Rock & Roll", None)
            .post(5, "<script>", "/a?b=1&c='2'", &[1])
            .build();
        let lines = render_one(&site, "Rock & Roll", 0);
        assert!(lines[0].contains(">Rock &amp; Roll<"));
        assert!(lines[1].contains("href='/a?b=1&amp;c=&#039;2&#039;'"));
        assert!(lines[1].contains("<span>&lt;script&gt;</span>"));
    }
}
