//! The timeline widget as seen by the host
//!
//! The host drives three operations on each widget instance:
//!
//! - `render` - print the timeline on a page
//! - `form` - print the settings form in the widget editor
//! - `update` - sanitize submitted settings into the record to persist
//!
//! Settings live in the host as an `InstanceRecord`; `WidgetConfig` is its
//! typed, default-filled view.

mod config;
mod form;
mod sanitize;

pub use config::{CATEGORY_KEY, InstanceRecord, MAX_DEPTH_KEY, TITLE_KEY, WidgetConfig};
pub use form::{FieldNames, write_form};
pub use sanitize::{strip_tags, update};

use std::io::Write;

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::Category;
use crate::output::{NodeRenderer, RenderConfig, escape_html};
use crate::store::{CategoryStore, PostStore};
use crate::tree::{TimelineCollector, TimelineNode, TreeWalker};

/// Identifier the widget registers under.
pub const WIDGET_ID_BASE: &str = "TimelineWidget";

/// Registration details handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    pub id_base: String,
    pub name: String,
    pub description: String,
}

impl Default for WidgetDescriptor {
    fn default() -> Self {
        Self {
            id_base: WIDGET_ID_BASE.to_string(),
            name: WIDGET_ID_BASE.to_string(),
            description: "A timeline widget".to_string(),
        }
    }
}

/// Markup the host wraps around each widget on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetArgs {
    pub before_widget: String,
    pub after_widget: String,
    pub before_title: String,
    pub after_title: String,
}

/// What a render call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The timeline was written; `categories` nodes were visited.
    Rendered { categories: usize },
    /// The root category name did not resolve; one error line was written.
    InvalidRoot,
}

pub struct TimelineWidget<'a, S: CategoryStore + PostStore + ?Sized> {
    store: &'a S,
    render: RenderConfig,
}

impl<'a, S: CategoryStore + PostStore + ?Sized> TimelineWidget<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            render: RenderConfig::default(),
        }
    }

    pub fn with_render_config(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    pub fn descriptor(&self) -> WidgetDescriptor {
        WidgetDescriptor::default()
    }

    /// Render the widget for a stored instance record.
    pub fn render<W: Write>(
        &self,
        args: &WidgetArgs,
        instance: &InstanceRecord,
        out: &mut W,
    ) -> Result<RenderOutcome> {
        self.render_config(args, &WidgetConfig::from_instance(instance), out)
    }

    /// Render the widget for typed settings.
    ///
    /// An unknown root category is reported inline and nothing else is
    /// written, not even the host's wrapper markup.
    pub fn render_config<W: Write>(
        &self,
        args: &WidgetArgs,
        config: &WidgetConfig,
        out: &mut W,
    ) -> Result<RenderOutcome> {
        let WidgetArgs {
            before_widget,
            after_widget,
            before_title,
            after_title,
        } = args;

        let Some(root) = self.resolve_root(&config.root_category)? else {
            warn!("Timeline root category '{}' not found", config.root_category);
            writeln!(
                out,
                "<span>Timeline root category is not set to a valid category, found {}</span>",
                escape_html(&config.root_category)
            )?;
            return Ok(RenderOutcome::InvalidRoot);
        };

        write!(out, "{}", before_widget)?;
        if !config.title.is_empty() {
            writeln!(
                out,
                "{}{}{}",
                before_title,
                escape_html(&config.title),
                after_title
            )?;
        }

        let categories = match config.walker_config() {
            Some(walker_config) => {
                let mut renderer = NodeRenderer::new(self.store, self.render.clone(), &mut *out);
                TreeWalker::new(self.store, walker_config).walk(&root, &mut renderer)?
            }
            None => {
                warn!("Max depth {} leaves nothing to show", config.max_depth);
                0
            }
        };

        write!(out, "{}", after_widget)?;
        debug!("Rendered timeline '{}' ({} categories)", root.name, categories);
        Ok(RenderOutcome::Rendered { categories })
    }

    /// Collect the timeline tree instead of rendering it. `None` if the root
    /// category is unknown or the depth leaves nothing to visit.
    pub fn collect(&self, config: &WidgetConfig) -> Result<Option<TimelineNode>> {
        let Some(root) = self.resolve_root(&config.root_category)? else {
            return Ok(None);
        };
        let Some(walker_config) = config.walker_config() else {
            return Ok(None);
        };
        let mut collector = TimelineCollector::new(self.store, self.render.max_posts);
        TreeWalker::new(self.store, walker_config).walk(&root, &mut collector)?;
        Ok(collector.finish())
    }

    /// Write the settings form for `instance`.
    pub fn form<W: Write>(
        &self,
        instance: &InstanceRecord,
        fields: &FieldNames,
        out: &mut W,
    ) -> Result<()> {
        let categories = self.store.list_all()?;
        write_form(out, instance, &categories, fields)
    }

    /// Sanitize submitted settings into the record to persist.
    pub fn update(&self, new: &InstanceRecord, old: &InstanceRecord) -> InstanceRecord {
        update(new, old)
    }

    pub fn resolve_root(&self, name: &str) -> Result<Option<Category>> {
        self.store.find_by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Site;
    use crate::test_utils::SiteBuilder;

    fn site() -> Site {
        SiteBuilder::new()
            .category(1, "Timeline", None)
            .category(2, "1990s", Some(1))
            .category(3, "2000s", Some(1))
            .category(4, "2004", Some(3))
            .post(10, "Launch", "/launch", &[2])
            .build()
    }

    fn args() -> WidgetArgs {
        WidgetArgs {
            before_widget: "<section>".to_string(),
            after_widget: "</section>".to_string(),
            before_title: "<h2>".to_string(),
            after_title: "</h2>".to_string(),
        }
    }

    fn config(cat: &str, title: &str, depth: i64) -> WidgetConfig {
        WidgetConfig {
            title: title.to_string(),
            root_category: cat.to_string(),
            max_depth: depth,
        }
    }

    fn render(site: &Site, config: &WidgetConfig) -> (RenderOutcome, String) {
        let mut out = Vec::new();
        let outcome = TimelineWidget::new(site)
            .render_config(&args(), config, &mut out)
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_timeline_example_order() {
        let (outcome, html) = render(&site(), &config("Timeline", "", 1));
        assert_eq!(outcome, RenderOutcome::Rendered { categories: 3 });

        let body = html
            .strip_prefix("<section>")
            .and_then(|s| s.strip_suffix("</section>"))
            .unwrap();
        let lines: Vec<_> = body.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains(">Timeline</span>"));
        assert!(lines[1].contains(">1990s</span>"));
        assert!(lines[2].contains("<span>Launch</span>"));
        assert!(lines[3].contains(">2000s</span>"));
        assert!(!html.contains("2004"));
    }

    #[test]
    fn test_title_wrapped_when_present() {
        let (_, html) = render(&site(), &config("Timeline", "History", 0));
        assert!(html.starts_with("<section><h2>History</h2>\n<span"));

        let (_, html) = render(&site(), &config("Timeline", "", 0));
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn test_invalid_root_writes_single_error_line() {
        let (outcome, html) = render(&site(), &config("Nowhere", "History", 10));
        assert_eq!(outcome, RenderOutcome::InvalidRoot);
        assert_eq!(html.lines().count(), 1);
        assert_eq!(
            html,
            "<span>Timeline root category is not set to a valid category, found Nowhere</span>\n"
        );
    }

    #[test]
    fn test_empty_root_name_is_invalid() {
        let (outcome, _) = render(&site(), &WidgetConfig::default());
        assert_eq!(outcome, RenderOutcome::InvalidRoot);
    }

    #[test]
    fn test_unbounded_depth_shows_everything() {
        let (outcome, html) = render(&site(), &config("Timeline", "", -1));
        assert_eq!(outcome, RenderOutcome::Rendered { categories: 4 });
        assert!(html.contains(">2004</span>"));
    }

    #[test]
    fn test_depth_below_unbounded_shows_no_tree() {
        let (outcome, html) = render(&site(), &config("Timeline", "History", -3));
        assert_eq!(outcome, RenderOutcome::Rendered { categories: 0 });
        assert_eq!(html, "<section><h2>History</h2>\n</section>");
    }

    #[test]
    fn test_render_from_instance_record() {
        let site = site();
        let widget = TimelineWidget::new(&site);
        let mut submitted = InstanceRecord::new();
        submitted.insert("cat".to_string(), "2000s".to_string());
        let instance = widget.update(&submitted, &InstanceRecord::new());

        let mut out = Vec::new();
        let outcome = widget.render(&WidgetArgs::default(), &instance, &mut out).unwrap();
        assert_eq!(outcome, RenderOutcome::Rendered { categories: 2 });
    }

    #[test]
    fn test_collect() {
        let site = site();
        let widget = TimelineWidget::new(&site);
        let tree = widget.collect(&config("Timeline", "", -1)).unwrap().unwrap();
        assert_eq!(tree.category_count(), 4);
        assert!(widget.collect(&config("Nowhere", "", -1)).unwrap().is_none());
    }

    #[test]
    fn test_form_lists_all_categories() {
        let site = site();
        let mut out = Vec::new();
        TimelineWidget::new(&site)
            .form(&InstanceRecord::new(), &FieldNames::new(WIDGET_ID_BASE, 1), &mut out)
            .unwrap();
        let html = String::from_utf8(out).unwrap();
        assert_eq!(html.matches("<option").count(), 4);
    }
}
