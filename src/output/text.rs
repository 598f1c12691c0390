//! Console formatter for previewing a timeline in a terminal

use std::io::Write;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::error::Result;
use crate::model::Category;
use crate::store::PostStore;
use crate::tree::CategoryVisitor;

use super::config::RenderConfig;
use super::utils::text_indent;

/// Writes each visited category as an indented, colored label followed by its
/// posts one level deeper.
pub struct TextFormatter<'a, P: PostStore + ?Sized, W: WriteColor> {
    posts: &'a P,
    config: RenderConfig,
    out: W,
    categories: usize,
    links: usize,
}

impl<'a, P: PostStore + ?Sized, W: WriteColor> TextFormatter<'a, P, W> {
    pub fn new(posts: &'a P, config: RenderConfig, out: W) -> Self {
        Self {
            posts,
            config,
            out,
            categories: 0,
            links: 0,
        }
    }

    /// Print the summary line.
    pub fn finish(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{} categories, {} posts", self.categories, self.links)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<P: PostStore + ?Sized, W: WriteColor> CategoryVisitor for TextFormatter<'_, P, W> {
    fn visit(&mut self, category: &Category, depth: usize) -> Result<()> {
        let posts = self
            .posts
            .list_by_category(category.id, self.config.max_posts)?;

        write!(self.out, "{}", text_indent(depth))?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}", category.name)?;
        self.out.reset()?;
        writeln!(self.out)?;

        let post_indent = text_indent(depth + 1);
        for post in &posts {
            write!(self.out, "{}", post_indent)?;
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
            write!(self.out, "{}", post.title)?;
            self.out.reset()?;
            write!(self.out, "  ")?;
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.out, "{}", post.permalink)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }

        self.categories += 1;
        self.links += posts.len();
        Ok(())
    }
}
