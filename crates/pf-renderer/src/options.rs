//! Renderer options.

/// Default nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for [`TreeRenderer`](crate::TreeRenderer).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Maximum element nesting depth.
    ///
    /// Deeper subtrees are dropped from general output. Inside code blocks the
    /// whole block falls back to plain text instead.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
