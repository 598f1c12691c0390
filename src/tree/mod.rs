//! Category tree walking
//!
//! - `TreeWalker`: depth-first, pre-order walk of a category subtree with an
//!   inclusive depth bound, calling a `CategoryVisitor` for each node
//! - `TimelineCollector`: visitor that rebuilds the visited subtree in memory,
//!   required for JSON output

mod collector;
mod config;
mod node;
mod visitor;
mod walker;

pub use collector::TimelineCollector;
pub use config::{DEFAULT_MAX_DEPTH, WalkerConfig};
pub use node::{TimelineNode, TimelinePost};
pub use visitor::{CategoryVisitor, FnVisitor};
pub use walker::TreeWalker;
