/// OctreeNode: passive container stored in the Octree arena.

use std::hash::Hash;
use rustc_hash::FxHashSet;
use crate::geometry::AABB;

/// Index of a node in the Octree arena
pub type NodeIndex = usize;

/// Index of the root node in the arena
pub const ROOT: NodeIndex = 0;

/// A single node of the octree.
///
/// Holds no invariant itself; the Octree maintains them.
#[derive(Debug, Clone)]
pub struct OctreeNode<K> {
    /// World-space bounds, immutable after construction
    pub(crate) bounds: AABB,
    /// Entities stored at this node (straddlers when internal)
    pub(crate) entities: FxHashSet<K>,
    /// First of 8 contiguous children in the arena (None = leaf)
    pub(crate) first_child: Option<NodeIndex>,
    /// Parent index (relation only, None for the root)
    pub(crate) parent: Option<NodeIndex>,
    /// Depth in the tree (root = 0)
    pub(crate) depth: u32,
}

impl<K: Copy + Eq + Hash> OctreeNode<K> {
    pub(crate) fn new(bounds: AABB, parent: Option<NodeIndex>, depth: u32) -> Self {
        Self {
            bounds,
            entities: FxHashSet::default(),
            first_child: None,
            parent,
            depth,
        }
    }

    /// World-space bounds of this node
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Entities stored directly at this node
    pub fn entities(&self) -> &FxHashSet<K> {
        &self.entities
    }

    /// Whether the node has no children
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    /// Arena indices of the 8 children (None for a leaf)
    ///
    /// Child `i` covers the octant selected by bit 0 (x), bit 1 (y), bit 2 (z).
    pub fn children(&self) -> Option<[NodeIndex; 8]> {
        self.first_child.map(|first| std::array::from_fn(|octant| first + octant))
    }

    /// Parent index (None for the root)
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Depth of this node (root = 0)
    pub fn depth(&self) -> u32 {
        self.depth
    }
}
