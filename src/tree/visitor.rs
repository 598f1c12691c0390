//! Visitor callback invoked for each category reached by a walk

use crate::error::Result;
use crate::model::Category;

/// Receives every visited category together with its depth below the walk root.
///
/// Returning an error aborts the walk.
pub trait CategoryVisitor {
    fn visit(&mut self, category: &Category, depth: usize) -> Result<()>;
}

/// Adapts a closure into a `CategoryVisitor`.
pub struct FnVisitor<F>(pub F);

impl<F> CategoryVisitor for FnVisitor<F>
where
    F: FnMut(&Category, usize) -> Result<()>,
{
    fn visit(&mut self, category: &Category, depth: usize) -> Result<()> {
        (self.0)(category, depth)
    }
}
