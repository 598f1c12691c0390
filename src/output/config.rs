//! Output configuration types

/// Posts listed under each category.
pub const DEFAULT_MAX_POSTS: usize = 32;

/// CSS unit of one indentation level in the HTML output.
pub const DEFAULT_INDENT_UNIT: &str = "em";

/// Configuration for per-category rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub max_posts: usize,
    pub indent_unit: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_posts: DEFAULT_MAX_POSTS,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}

/// Configuration for console output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub render: RenderConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            render: RenderConfig::default(),
        }
    }
}
