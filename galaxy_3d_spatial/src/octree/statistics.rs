/// Octree diagnostics: statistics gathering and log dumps.

use std::fmt;
use std::hash::Hash;
use super::node::{NodeIndex, ROOT};
use super::octree::{Octree, SOURCE};

/// Snapshot of the tree shape, gathered in a single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OctreeStatistics {
    /// All reachable nodes (leaves + internal)
    pub total_nodes: usize,
    /// Nodes without children
    pub leaf_nodes: usize,
    /// Nodes with 8 children
    pub internal_nodes: usize,
    /// Entity references over all nodes
    pub total_entities: usize,
    /// Entities retained at internal nodes (straddlers)
    pub internal_entities: usize,
    /// Deepest node depth (root = 0)
    pub max_depth_reached: u32,
    /// Fewest entities held by a leaf
    pub min_entities_per_leaf: usize,
    /// Most entities held by a leaf
    pub max_entities_per_leaf: usize,
    /// Mean entities per leaf
    pub average_entities_per_leaf: f32,
    /// Leaves holding no entity
    pub empty_leaves: usize,
    /// Leaves above capacity at maximum depth
    pub overfilled_nodes: usize,
}

impl fmt::Display for OctreeStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes: {} ({} leaves, {} internal)",
            self.total_nodes, self.leaf_nodes, self.internal_nodes)?;
        writeln!(f, "Entities: {} ({} at internal nodes)",
            self.total_entities, self.internal_entities)?;
        writeln!(f, "Max depth reached: {}", self.max_depth_reached)?;
        writeln!(f, "Entities per leaf: min {}, max {}, avg {:.2}",
            self.min_entities_per_leaf, self.max_entities_per_leaf, self.average_entities_per_leaf)?;
        write!(f, "Empty leaves: {}, overfilled nodes: {}",
            self.empty_leaves, self.overfilled_nodes)
    }
}

impl<K: Copy + Eq + Hash> Octree<K> {
    /// Walk the whole tree once and gather shape statistics.
    pub fn statistics(&self) -> OctreeStatistics {
        let mut stats = OctreeStatistics {
            min_entities_per_leaf: usize::MAX,
            ..Default::default()
        };
        let mut leaf_entities = 0usize;

        self.gather_statistics(ROOT, &mut stats, &mut leaf_entities);

        if stats.leaf_nodes > 0 {
            stats.average_entities_per_leaf = leaf_entities as f32 / stats.leaf_nodes as f32;
        } else {
            stats.min_entities_per_leaf = 0;
        }
        stats
    }

    fn gather_statistics(
        &self,
        node_idx: NodeIndex,
        stats: &mut OctreeStatistics,
        leaf_entities: &mut usize,
    ) {
        let Some(node) = self.nodes.get(node_idx) else {
            return;
        };
        let count = node.entities.len();

        stats.total_nodes += 1;
        stats.total_entities += count;
        stats.max_depth_reached = stats.max_depth_reached.max(node.depth);

        match node.children() {
            None => {
                stats.leaf_nodes += 1;
                *leaf_entities += count;
                stats.min_entities_per_leaf = stats.min_entities_per_leaf.min(count);
                stats.max_entities_per_leaf = stats.max_entities_per_leaf.max(count);
                if count == 0 {
                    stats.empty_leaves += 1;
                }
                if count > self.config.max_entities_per_node
                    && node.depth >= self.config.maximum_depth
                {
                    stats.overfilled_nodes += 1;
                }
            }
            Some(children) => {
                stats.internal_nodes += 1;
                stats.internal_entities += count;
                for child in children {
                    self.gather_statistics(child, stats, leaf_entities);
                }
            }
        }
    }

    /// Log the statistics at Info severity, one line per metric group.
    pub fn debug_print_octree_statistics(&self) {
        let stats = self.statistics();
        crate::spatial_info!(SOURCE, "Octree statistics ({} indexed entities)", self.len());
        for line in stats.to_string().lines() {
            crate::spatial_info!(SOURCE, "  {}", line);
        }
    }

    /// Log one Debug line per node, depth-first, indented by depth.
    pub fn debug_print_octree_hierarchy(&self) {
        for line in self.hierarchy_lines() {
            crate::spatial_debug!(SOURCE, "{}", line);
        }
    }

    /// Depth-first description of every node (used by the hierarchy dump).
    pub fn hierarchy_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.nodes.len());
        self.hierarchy_recursively(ROOT, &mut lines);
        lines
    }

    fn hierarchy_recursively(&self, node_idx: NodeIndex, lines: &mut Vec<String>) {
        let Some(node) = self.nodes.get(node_idx) else {
            return;
        };

        lines.push(format!(
            "{}Node {} [{}] depth {}: {} entities",
            "  ".repeat(node.depth as usize),
            node_idx,
            if node.is_leaf() { "leaf" } else { "internal" },
            node.depth,
            node.entities.len(),
        ));

        if let Some(children) = node.children() {
            for child in children {
                self.hierarchy_recursively(child, lines);
            }
        }
    }
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod tests;
