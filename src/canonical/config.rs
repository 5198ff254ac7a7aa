//! Coloring configuration
//!
//! Controls how long the refinement may run and whether passes alternate
//! between the forward and the reversed orientation of the graph.

/// Configuration for the canonical edge-coloring refinement
///
/// Refinement repeats full passes until one of them leaves every edge color
/// unchanged. The pass limit bounds inputs that never settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringConfig {
    /// Maximum number of full passes before giving up with
    /// [`Error::ColoringDiverged`](crate::Error::ColoringDiverged) (default: 256)
    pub max_passes: usize,

    /// Alternate forward and reversed passes (default: true)
    /// When false every pass walks the graph from its sources towards its sinks
    pub alternate_directions: bool,
}

impl Default for ColoringConfig {
    fn default() -> Self {
        Self {
            max_passes: 256,
            alternate_directions: true,
        }
    }
}

impl ColoringConfig {
    /// Creates a configuration that only refines along edge direction
    ///
    /// Converges in fewer passes but distinguishes edges only by what lies
    /// upstream of them.
    #[must_use]
    pub fn forward_only() -> Self {
        Self {
            alternate_directions: false,
            ..Self::default()
        }
    }

    /// Creates the full bidirectional configuration
    #[must_use]
    pub fn bidirectional() -> Self {
        Self::default()
    }

    /// Returns this configuration with a different pass limit
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}
