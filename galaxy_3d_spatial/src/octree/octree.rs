/// Octree: dynamic spatial index over entity keys.
///
/// Placement policy (ancestor retention): an entity descends into a child
/// only when its world AABB intersects exactly one of the 8 children.
/// If it intersects none or several, it stays at the enclosing node.
///
/// Consequences:
/// - Every entity is referenced by exactly one node, no duplicates
/// - Entities straddling a split plane live at internal nodes
/// - Queries must collect entities from every visited node, not just leaves
///
/// Nodes are stored in a flat arena; the 8 children of a node are
/// contiguous and addressed through `first_child`. Leaves subdivide when
/// they exceed `max_entities_per_node` and are above `maximum_depth`.
/// Nodes are never merged back; `clear` and `rebuild` are the only way
/// to shrink the tree.

use std::hash::Hash;
use rustc_hash::FxHashMap;
use glam::Vec3;
use crate::error::Result;
use crate::spatial_bail;
use crate::entity::{EntityKey, SpatialEntity};
use crate::geometry::AABB;
use super::config::OctreeConfig;
use super::node::{OctreeNode, NodeIndex, ROOT};

pub(super) const SOURCE: &str = "galaxy3d::Octree";

/// Dynamic octree over entity keys `K`.
pub struct Octree<K = EntityKey> {
    /// Flat node arena (index 0 = root, never empty)
    pub(super) nodes: Vec<OctreeNode<K>>,
    /// Bounds of the root node
    pub(super) world_bounds: AABB,
    /// Capacity and depth limits
    pub(super) config: OctreeConfig,
    /// World AABB each indexed entity was inserted with.
    /// Drives the descent in `remove` and the reinsertion in `rebuild`.
    pub(super) entity_bounds: FxHashMap<K, AABB>,
    /// Debug visualization toggle
    pub(super) should_draw: bool,
}

impl<K: Copy + Eq + Hash> Octree<K> {
    /// Create an empty octree with the default configuration.
    ///
    /// # Errors
    ///
    /// `InvalidBounds` if `world_bounds` is not finite or inverted.
    pub fn new(world_bounds: AABB) -> Result<Self> {
        Self::with_config(world_bounds, OctreeConfig::default())
    }

    /// Create an empty octree.
    ///
    /// # Arguments
    ///
    /// * `world_bounds` - Bounds of the root node. Entities outside are
    ///   still accepted and retained at the root.
    /// * `config` - Leaf capacity and depth limit
    ///
    /// # Errors
    ///
    /// `InvalidBounds` or `InvalidConfig`.
    pub fn with_config(world_bounds: AABB, config: OctreeConfig) -> Result<Self> {
        if !world_bounds.is_valid() {
            spatial_bail!(SOURCE, InvalidBounds,
                "world bounds must be finite with min <= max, got {:?} .. {:?}",
                world_bounds.min, world_bounds.max);
        }
        config.validate()?;

        Ok(Self {
            nodes: vec![OctreeNode::new(world_bounds, None, 0)],
            world_bounds,
            config,
            entity_bounds: FxHashMap::default(),
            should_draw: false,
        })
    }

    // ===== ACCESSORS =====

    /// Bounds of the root node
    pub fn bounds(&self) -> &AABB {
        &self.world_bounds
    }

    /// Capacity and depth limits
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Number of indexed entities
    pub fn len(&self) -> usize {
        self.entity_bounds.len()
    }

    /// Whether no entity is indexed
    pub fn is_empty(&self) -> bool {
        self.entity_bounds.is_empty()
    }

    /// Whether `key` is indexed
    pub fn contains(&self, key: K) -> bool {
        self.entity_bounds.contains_key(&key)
    }

    /// World AABB `key` was indexed with
    pub fn entity_bounds(&self, key: K) -> Option<&AABB> {
        self.entity_bounds.get(&key)
    }

    /// Number of allocated nodes (including empty ones)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node by arena index
    pub fn node(&self, index: NodeIndex) -> Option<&OctreeNode<K>> {
        self.nodes.get(index)
    }

    /// Root node
    pub fn root(&self) -> &OctreeNode<K> {
        &self.nodes[ROOT]
    }

    /// Arena index of the node currently holding `key`.
    pub fn locate(&self, key: K) -> Option<NodeIndex> {
        let aabb = self.entity_bounds.get(&key)?;
        self.locate_recursively(ROOT, key, aabb)
    }

    fn locate_recursively(&self, node_idx: NodeIndex, key: K, aabb: &AABB) -> Option<NodeIndex> {
        let node = self.nodes.get(node_idx)?;
        if node.entities.contains(&key) {
            return Some(node_idx);
        }
        let child = self.single_intersecting_child(node_idx, aabb)?;
        self.locate_recursively(child, key, aabb)
    }

    // ===== INSERT =====

    /// Insert an entity using its world AABB
    /// (render bounds, or a point AABB at its position).
    pub fn insert<E: SpatialEntity<Key = K>>(&mut self, entity: &E) {
        self.insert_aabb(entity.key(), entity.world_aabb());
    }

    /// Insert `key` with an explicit world AABB.
    ///
    /// A key that is already indexed is moved (removed, then reinserted).
    pub fn insert_aabb(&mut self, key: K, world_aabb: AABB) {
        if self.entity_bounds.contains_key(&key) {
            self.remove(key);
        }
        self.entity_bounds.insert(key, world_aabb);
        self.insert_recursively(ROOT, key, &world_aabb);
    }

    fn insert_recursively(&mut self, node_idx: NodeIndex, key: K, aabb: &AABB) {
        let Some(node) = self.nodes.get(node_idx) else {
            return;
        };

        if node.is_leaf() {
            let depth = node.depth;
            let node = &mut self.nodes[node_idx];
            node.entities.insert(key);

            if node.entities.len() > self.config.max_entities_per_node
                && depth < self.config.maximum_depth
            {
                self.subdivide(node_idx);
                self.redistribute_entities(node_idx);
            }
            return;
        }

        match self.single_intersecting_child(node_idx, aabb) {
            Some(child) => self.insert_recursively(child, key, aabb),
            // Zero or several children: retain at this node
            None => {
                self.nodes[node_idx].entities.insert(key);
            }
        }
    }

    /// The only child of `node_idx` whose bounds intersect `aabb`.
    ///
    /// None for a leaf, or when zero or several children intersect.
    pub(super) fn single_intersecting_child(&self, node_idx: NodeIndex, aabb: &AABB) -> Option<NodeIndex> {
        let children = self.nodes.get(node_idx)?.children()?;

        let mut found = None;
        for child in children {
            if self.nodes[child].bounds.intersects(aabb) {
                if found.is_some() {
                    return None;
                }
                found = Some(child);
            }
        }
        found
    }

    // ===== SUBDIVISION =====

    /// Bounds of octant `octant` (0..8) of `parent`.
    ///
    /// Bit layout: bit0 = X, bit1 = Y, bit2 = Z (0 = min half, 1 = max half).
    pub(super) fn child_bounds(parent: &AABB, octant: usize) -> AABB {
        let center = parent.center();
        let high = |bit: usize| octant & bit != 0;

        AABB {
            min: Vec3::new(
                if high(1) { center.x } else { parent.min.x },
                if high(2) { center.y } else { parent.min.y },
                if high(4) { center.z } else { parent.min.z },
            ),
            max: Vec3::new(
                if high(1) { parent.max.x } else { center.x },
                if high(2) { parent.max.y } else { center.y },
                if high(4) { parent.max.z } else { center.z },
            ),
        }
    }

    /// Turn a leaf into an internal node with 8 empty leaf children.
    ///
    /// The node's own entities are left in place; see `redistribute_entities`.
    fn subdivide(&mut self, node_idx: NodeIndex) {
        let Some(node) = self.nodes.get(node_idx) else {
            return;
        };
        if !node.is_leaf() {
            return;
        }

        let parent_bounds = node.bounds;
        let child_depth = node.depth + 1;
        let first_child = self.nodes.len();

        self.nodes.extend((0..8).map(|octant| {
            OctreeNode::new(Self::child_bounds(&parent_bounds, octant), Some(node_idx), child_depth)
        }));
        self.nodes[node_idx].first_child = Some(first_child);

        crate::spatial_debug!(SOURCE, "Subdivided node {} (depth {}) into nodes {}..{}",
            node_idx, child_depth - 1, first_child, first_child + 8);
    }

    /// Push the entities of an internal node down into its children.
    ///
    /// Each entity is classified like an insert: one intersecting child
    /// → move there, otherwise stay. Children left above capacity are
    /// subdivided and redistributed in turn. No-op on a leaf.
    fn redistribute_entities(&mut self, node_idx: NodeIndex) {
        let Some(children) = self.nodes.get(node_idx).and_then(|node| node.children()) else {
            return;
        };

        let entities = std::mem::take(&mut self.nodes[node_idx].entities);
        for key in entities {
            let target = self
                .entity_bounds
                .get(&key)
                .and_then(|aabb| self.single_intersecting_child(node_idx, aabb))
                .unwrap_or(node_idx);
            self.nodes[target].entities.insert(key);
        }

        for child in children {
            let node = &self.nodes[child];
            if node.entities.len() > self.config.max_entities_per_node
                && node.depth < self.config.maximum_depth
            {
                self.subdivide(child);
                self.redistribute_entities(child);
            }
        }
    }

    // ===== REMOVE / UPDATE =====

    /// Remove `key` from the tree.
    ///
    /// Returns `false` (and changes nothing) if the key is not indexed.
    pub fn remove(&mut self, key: K) -> bool {
        let Some(aabb) = self.entity_bounds.remove(&key) else {
            crate::spatial_trace!(SOURCE, "Remove of an entity that is not indexed, ignored");
            return false;
        };

        let removed = self.remove_recursively(ROOT, key, &aabb);
        debug_assert!(removed, "indexed entity not found in the tree");
        removed
    }

    /// Descend along the single-child path of `aabb`, checking each
    /// node's own set first. Stops where the path forks or ends.
    fn remove_recursively(&mut self, node_idx: NodeIndex, key: K, aabb: &AABB) -> bool {
        let Some(node) = self.nodes.get_mut(node_idx) else {
            return false;
        };
        if node.entities.remove(&key) {
            return true;
        }

        match self.single_intersecting_child(node_idx, aabb) {
            Some(child) => self.remove_recursively(child, key, aabb),
            None => false,
        }
    }

    /// Re-place an entity after its extent changed (remove + insert).
    pub fn update<E: SpatialEntity<Key = K>>(&mut self, entity: &E) {
        self.update_aabb(entity.key(), entity.world_aabb());
    }

    /// Re-place `key` with a new world AABB (remove + insert).
    pub fn update_aabb(&mut self, key: K, world_aabb: AABB) {
        self.remove(key);
        self.insert_aabb(key, world_aabb);
    }

    // ===== CLEAR / REBUILD =====

    /// Drop every node and entity; the root becomes an empty leaf
    /// with the original bounds.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(OctreeNode::new(self.world_bounds, None, 0));
        self.entity_bounds.clear();

        crate::spatial_debug!(SOURCE, "Cleared");
    }

    /// Rebuild the tree from scratch with the same root bounds and
    /// the same entities, reinserted with their recorded AABBs.
    ///
    /// Explicit operation, never triggered automatically.
    pub fn rebuild(&mut self) {
        let mut entities = rustc_hash::FxHashSet::default();
        self.collect_all_entities(&mut entities);

        let bounds = std::mem::take(&mut self.entity_bounds);
        let old_node_count = self.nodes.len();
        self.clear();

        for key in entities {
            if let Some(aabb) = bounds.get(&key) {
                self.entity_bounds.insert(key, *aabb);
                self.insert_recursively(ROOT, key, aabb);
            }
        }

        crate::spatial_debug!(SOURCE, "Rebuilt: {} entities, {} -> {} nodes",
            self.entity_bounds.len(), old_node_count, self.nodes.len());
    }
}

#[cfg(test)]
#[path = "octree_tests.rs"]
mod tests;
