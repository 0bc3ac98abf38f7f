use glam::Vec3;
use slotmap::SlotMap;
use super::*;

struct TestEntity {
    key: EntityKey,
    position: Vec3,
    bounds: Option<AABB>,
}

impl SpatialEntity for TestEntity {
    type Key = EntityKey;

    fn key(&self) -> EntityKey {
        self.key
    }

    fn render_bounds(&self) -> Option<AABB> {
        self.bounds
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

#[test]
fn test_world_aabb_prefers_render_bounds() {
    let mut keys = SlotMap::<EntityKey, ()>::with_key();
    let bounds = AABB::new(Vec3::splat(-2.0), Vec3::splat(2.0));
    let entity = TestEntity { key: keys.insert(()), position: Vec3::splat(100.0), bounds: Some(bounds) };

    assert_eq!(entity.world_aabb(), bounds);
}

#[test]
fn test_world_aabb_falls_back_to_point() {
    let mut keys = SlotMap::<EntityKey, ()>::with_key();
    let entity = TestEntity { key: keys.insert(()), position: Vec3::new(1.0, 2.0, 3.0), bounds: None };

    let aabb = entity_world_aabb(&entity);
    assert_eq!(aabb.min, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_entity_keys_are_distinct() {
    let mut keys = SlotMap::<EntityKey, ()>::with_key();
    let a = keys.insert(());
    let b = keys.insert(());
    assert_ne!(a, b);
}
