/// Spatial queries over the octree.
///
/// Every query is a top-down traversal: test the node bounds against the
/// query shape, prune the subtree on a miss, otherwise collect every
/// entity stored at the node and recurse into all 8 children.
///
/// Entities stored at a visited node are collected without an individual
/// test (ancestor-retained entities may only partially overlap the query).
/// Callers needing exact hits refine the returned set themselves.
///
/// Each query returns the number of nodes whose bounds were tested.

use std::hash::Hash;
use rustc_hash::FxHashSet;
use glam::Vec3;
use crate::geometry::{AABB, Frustum, FrustumTest};
use super::node::{NodeIndex, ROOT};
use super::octree::Octree;

impl<K: Copy + Eq + Hash> Octree<K> {
    /// Collect entities from nodes hit by the half-line
    /// `origin + t * direction`, `t >= 0`.
    pub fn collect_intersecting_objects_with_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        results: &mut FxHashSet<K>,
    ) -> usize {
        self.collect_matching(ROOT, &|bounds: &AABB| bounds.intersects_ray(origin, direction).is_some(), results)
    }

    /// Collect entities from nodes overlapping `aabb`.
    pub fn collect_intersecting_objects_with_aabb(
        &self,
        aabb: &AABB,
        results: &mut FxHashSet<K>,
    ) -> usize {
        self.collect_matching(ROOT, &|bounds: &AABB| bounds.intersects(aabb), results)
    }

    /// Collect entities from nodes overlapping the sphere.
    pub fn collect_intersecting_objects_with_sphere(
        &self,
        center: Vec3,
        radius: f32,
        results: &mut FxHashSet<K>,
    ) -> usize {
        self.collect_matching(ROOT, &|bounds: &AABB| bounds.intersects_sphere(center, radius), results)
    }

    /// Collect entities from nodes visible in `frustum`.
    ///
    /// Uses 3-way classification: a node fully inside the frustum has its
    /// whole subtree collected without further plane tests.
    pub fn collect_visible_entities_frustum(
        &self,
        frustum: &Frustum,
        results: &mut FxHashSet<K>,
    ) -> usize {
        self.collect_frustum_recursively(ROOT, frustum, results)
    }

    /// Collect every indexed entity.
    ///
    /// Returns the number of nodes traversed.
    pub fn collect_all_entities(&self, results: &mut FxHashSet<K>) -> usize {
        self.collect_subtree(ROOT, results)
    }

    fn collect_matching<F>(&self, node_idx: NodeIndex, test: &F, results: &mut FxHashSet<K>) -> usize
    where
        F: Fn(&AABB) -> bool,
    {
        let Some(node) = self.nodes.get(node_idx) else {
            return 0;
        };
        if !test(&node.bounds) {
            return 1;
        }

        results.extend(node.entities.iter().copied());

        let mut visited = 1;
        if let Some(children) = node.children() {
            for child in children {
                visited += self.collect_matching(child, test, results);
            }
        }
        visited
    }

    fn collect_frustum_recursively(
        &self,
        node_idx: NodeIndex,
        frustum: &Frustum,
        results: &mut FxHashSet<K>,
    ) -> usize {
        let Some(node) = self.nodes.get(node_idx) else {
            return 0;
        };

        match frustum.classify_aabb(&node.bounds) {
            FrustumTest::Outside => 1,
            FrustumTest::Inside => {
                self.collect_subtree(node_idx, results);
                1
            }
            FrustumTest::Partial => {
                results.extend(node.entities.iter().copied());

                let mut visited = 1;
                if let Some(children) = node.children() {
                    for child in children {
                        visited += self.collect_frustum_recursively(child, frustum, results);
                    }
                }
                visited
            }
        }
    }

    /// Collect all entities of a subtree without testing bounds.
    fn collect_subtree(&self, node_idx: NodeIndex, results: &mut FxHashSet<K>) -> usize {
        let Some(node) = self.nodes.get(node_idx) else {
            return 0;
        };
        results.extend(node.entities.iter().copied());

        let mut visited = 1;
        if let Some(children) = node.children() {
            for child in children {
                visited += self.collect_subtree(child, results);
            }
        }
        visited
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
