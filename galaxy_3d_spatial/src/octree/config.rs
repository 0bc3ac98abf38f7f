/// Octree tuning parameters.

use crate::error::Result;
use crate::spatial_bail;

/// Capacity threshold that triggers subdivision of a leaf
pub const MAX_ENTITIES_PER_NODE: usize = 8;

/// Subdivision limit (root = depth 0); leaves at this depth may be overfilled
pub const MAXIMUM_DEPTH: u32 = 5;

/// Octree configuration
///
/// # Example
///
/// ```
/// use galaxy_3d_spatial::galaxy3d::spatial::OctreeConfig;
///
/// let config = OctreeConfig::default()
///     .with_max_entities_per_node(16)
///     .with_maximum_depth(3);
/// assert_eq!(config.max_entities_per_node, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctreeConfig {
    /// A leaf holding more entities than this subdivides (unless at maximum depth)
    pub max_entities_per_node: usize,
    /// Deepest level a node may be created at
    pub maximum_depth: u32,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_entities_per_node: MAX_ENTITIES_PER_NODE,
            maximum_depth: MAXIMUM_DEPTH,
        }
    }
}

impl OctreeConfig {
    /// Set the leaf capacity
    pub fn with_max_entities_per_node(mut self, max_entities_per_node: usize) -> Self {
        self.max_entities_per_node = max_entities_per_node;
        self
    }

    /// Set the depth limit
    pub fn with_maximum_depth(mut self, maximum_depth: u32) -> Self {
        self.maximum_depth = maximum_depth;
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the capacity is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_entities_per_node == 0 {
            spatial_bail!("galaxy3d::Octree", InvalidConfig,
                "max_entities_per_node must be >= 1, got 0");
        }
        Ok(())
    }
}
