use glam::{Vec3, Vec4};
use crate::geometry::AABB;
use crate::octree::OctreeConfig;
use super::*;

/// Records every draw call
#[derive(Default)]
struct RecordingDrawer {
    cubes: Vec<(Vec3, Vec3, Vec4)>,
    lines: usize,
}

impl DebugDraw for RecordingDrawer {
    fn draw_cube(&mut self, min: Vec3, max: Vec3, color: Vec4) {
        self.cubes.push((min, max, color));
    }

    fn draw_line(&mut self, _a: Vec3, _b: Vec3, _color: Vec4) {
        self.lines += 1;
    }
}

const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

fn world() -> AABB {
    AABB::new(Vec3::splat(-8.0), Vec3::splat(8.0))
}

#[test]
fn test_should_draw_toggle() {
    let mut octree = Octree::<u32>::new(world()).unwrap();
    assert!(!octree.should_draw());

    octree.toggle_should_draw();
    assert!(octree.should_draw());

    octree.set_should_draw(false);
    assert!(!octree.should_draw());
}

#[test]
fn test_debug_draw_disabled_draws_nothing() {
    let octree = Octree::<u32>::new(world()).unwrap();
    let mut drawer = RecordingDrawer::default();

    octree.debug_draw(&mut drawer, RED);

    assert!(drawer.cubes.is_empty());
}

#[test]
fn test_debug_draw_one_cube_per_node() {
    let config = OctreeConfig::default().with_max_entities_per_node(1);
    let mut octree = Octree::with_config(world(), config).unwrap();
    octree.insert_aabb(1u32, AABB::from_point(Vec3::splat(-4.0)));
    octree.insert_aabb(2u32, AABB::from_point(Vec3::splat(4.0)));
    octree.set_should_draw(true);

    let mut drawer = RecordingDrawer::default();
    octree.debug_draw(&mut drawer, RED);

    assert_eq!(drawer.cubes.len(), octree.node_count());
    assert_eq!(drawer.lines, 0);

    // Root is internal: caller color. Its children are shallow leaves.
    assert_eq!(drawer.cubes[0], (Vec3::splat(-8.0), Vec3::splat(8.0), RED));
    assert!(drawer.cubes[1..].iter().all(|(_, _, color)| *color == SHALLOW_LEAF_COLOR));
}

#[test]
fn test_debug_draw_deep_leaves_use_caller_color() {
    let config = OctreeConfig::default().with_max_entities_per_node(1);
    let mut octree = Octree::with_config(world(), config).unwrap();
    // Two points sharing octants down to depth 3
    octree.insert_aabb(1u32, AABB::from_point(Vec3::splat(7.1)));
    octree.insert_aabb(2u32, AABB::from_point(Vec3::splat(7.9)));
    octree.set_should_draw(true);

    let mut drawer = RecordingDrawer::default();
    octree.debug_draw(&mut drawer, RED);

    let deep_leaves = octree
        .hierarchy_lines()
        .iter()
        .filter(|line| line.contains("[leaf]") && !line.contains("depth 1:") && !line.contains("depth 2:"))
        .count();
    let red_cubes = drawer.cubes.iter().filter(|(_, _, color)| *color == RED).count();
    let internal = octree.statistics().internal_nodes;

    assert!(deep_leaves > 0);
    assert_eq!(red_cubes, internal + deep_leaves);
}
