//! Octree module: dynamic spatial index over entity keys.
//!
//! Nodes live in a flat arena owned by the Octree. Entities that do not
//! resolve to exactly one child are retained at the enclosing node, so
//! every query collects entities from internal nodes as well as leaves.

mod config;
mod node;
mod octree;
mod query;
mod statistics;
mod debug_draw;

pub use config::{OctreeConfig, MAX_ENTITIES_PER_NODE, MAXIMUM_DEPTH};
pub use node::{OctreeNode, NodeIndex, ROOT};
pub use octree::Octree;
pub use statistics::OctreeStatistics;
pub use debug_draw::{DebugDraw, SHALLOW_LEAF_COLOR, SHALLOW_LEAF_DEPTH};
