//! Resolution options and configuration.

/// Options for resolving a block graph.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Whether to run the field and table passes on separate threads
    pub parallel: bool,

    /// How to handle cells outside their table's declared dimensions
    pub bounds: BoundsPolicy,
}

impl ResolveOptions {
    /// Create new resolve options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel passes.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel passes.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the out-of-bounds cell policy.
    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            bounds: BoundsPolicy::Grow,
        }
    }
}

/// Policy for cells whose indices fall outside the declared grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Grow the grid to hold the cell at its stated position
    #[default]
    Grow,
    /// Discard cells outside the declared dimensions
    Drop,
}
