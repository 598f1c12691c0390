//! Configuration types for the tree walker

/// Depth used when a widget instance has no stored value.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Deepest depth that is still visited (root = 0). `None` walks the whole
    /// subtree.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Interpret a stored depth where `-1` means unbounded.
    ///
    /// Any other negative value bounds the walk below the root, so nothing
    /// would be visited; that case yields `None`.
    pub fn from_stored_depth(raw: i64) -> Option<Self> {
        match raw {
            -1 => Some(Self::unbounded()),
            n if n >= 0 => Some(Self::with_max_depth(usize::try_from(n).unwrap_or(usize::MAX))),
            _ => None,
        }
    }

    /// Check if a node at `depth` lies beyond the bound.
    pub fn exceeds_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}
