//! Timeline rendering
//!
//! This module provides formatters for a walked category tree:
//! - HTML output for the widget body (`NodeRenderer`)
//! - Console output with colors for previews (`TextFormatter`)
//! - JSON output of the collected tree
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared helpers (escaping, indentation)
//! - `html` - The widget's per-category HTML renderer
//! - `text` - Console formatter
//! - `json` - JSON output

mod config;
mod html;
mod json;
mod text;
mod utils;

pub use config::{DEFAULT_INDENT_UNIT, DEFAULT_MAX_POSTS, OutputConfig, RenderConfig};
pub use html::NodeRenderer;
pub use json::{print_json, write_json};
pub use text::TextFormatter;
pub use utils::{escape_html, text_indent};
