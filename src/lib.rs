//! timeline-menu - a timeline navigation widget over a category tree

pub mod error;
pub mod lifecycle;
pub mod model;
pub mod output;
pub mod store;
pub mod tree;
pub mod widget;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TimelineError};
pub use model::{Category, CategoryId, Post, PostId};
pub use output::{NodeRenderer, OutputConfig, RenderConfig, TextFormatter, print_json};
pub use store::{CategoryStore, InstanceStore, JsonInstanceStore, OptionStore, PostStore, Site};
pub use tree::{CategoryVisitor, TimelineNode, TreeWalker, WalkerConfig};
pub use widget::{
    FieldNames, InstanceRecord, RenderOutcome, TimelineWidget, WidgetArgs, WidgetConfig,
    WidgetDescriptor,
};
