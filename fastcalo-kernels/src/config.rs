//! Lane dispatch configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for lane dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaneConfig {
    /// Whether to spread lanes across the rayon thread pool.
    pub parallel: bool,
    /// Minimum number of lanes handed to a single rayon task.
    pub min_lanes_per_task: usize,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_lanes_per_task: 1024,
        }
    }
}

impl LaneConfig {
    /// Creates a new lane configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequential configuration, useful for debugging and tests.
    #[must_use]
    pub fn sequential() -> Self {
        Self::default().with_parallel(false)
    }

    /// Enables or disables parallel dispatch.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the minimum lanes per task (clamped to at least 1).
    #[must_use]
    pub fn with_min_lanes_per_task(mut self, lanes: usize) -> Self {
        self.min_lanes_per_task = lanes.max(1);
        self
    }
}
