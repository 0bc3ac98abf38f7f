/// Debug visualization of the octree node bounds.

use std::hash::Hash;
use glam::{Vec3, Vec4};
use super::node::{NodeIndex, ROOT};
use super::octree::Octree;

/// Leaves shallower than this are drawn with SHALLOW_LEAF_COLOR
pub const SHALLOW_LEAF_DEPTH: u32 = 3;

/// Color of leaves above SHALLOW_LEAF_DEPTH (opaque green)
pub const SHALLOW_LEAF_COLOR: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

/// Debug-draw collaborator (immediate-mode line renderer, editor gizmos, ...)
pub trait DebugDraw {
    /// Draw the wireframe of an axis-aligned box
    fn draw_cube(&mut self, min: Vec3, max: Vec3, color: Vec4);

    /// Draw a single line segment
    fn draw_line(&mut self, a: Vec3, b: Vec3, color: Vec4);
}

impl<K: Copy + Eq + Hash> Octree<K> {
    /// Enable or disable `debug_draw`
    pub fn set_should_draw(&mut self, should_draw: bool) {
        self.should_draw = should_draw;
    }

    /// Flip the `debug_draw` toggle
    pub fn toggle_should_draw(&mut self) {
        self.should_draw = !self.should_draw;
    }

    /// Whether `debug_draw` emits anything
    pub fn should_draw(&self) -> bool {
        self.should_draw
    }

    /// Draw every node's bounds with `color`; shallow leaves use
    /// SHALLOW_LEAF_COLOR. Does nothing while drawing is disabled.
    pub fn debug_draw(&self, drawer: &mut dyn DebugDraw, color: Vec4) {
        if !self.should_draw {
            return;
        }
        self.debug_draw_recursively(ROOT, drawer, color);
    }

    fn debug_draw_recursively(&self, node_idx: NodeIndex, drawer: &mut dyn DebugDraw, color: Vec4) {
        let Some(node) = self.nodes.get(node_idx) else {
            return;
        };

        let node_color = if node.is_leaf() && node.depth < SHALLOW_LEAF_DEPTH {
            SHALLOW_LEAF_COLOR
        } else {
            color
        };
        drawer.draw_cube(node.bounds.min, node.bounds.max, node_color);

        if let Some(children) = node.children() {
            for child in children {
                self.debug_draw_recursively(child, drawer, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "debug_draw_tests.rs"]
mod tests;
