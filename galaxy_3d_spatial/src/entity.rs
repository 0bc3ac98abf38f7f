/// Entity handles as seen by the spatial index.
///
/// The index never owns entities. It stores opaque, hashable keys and
/// asks the entity for its world-space extent at insert time.

use std::hash::Hash;
use glam::Vec3;
use slotmap::new_key_type;
use crate::geometry::AABB;

new_key_type! {
    /// Stable key identifying an entity owned by the scene.
    pub struct EntityKey;
}

/// An entity that can be placed in the spatial index.
///
/// # Example
///
/// ```
/// use galaxy_3d_spatial::galaxy3d::spatial::{AABB, SpatialEntity};
/// use galaxy_3d_spatial::glam::Vec3;
///
/// struct Marker { id: u32, position: Vec3 }
///
/// impl SpatialEntity for Marker {
///     type Key = u32;
///     fn key(&self) -> u32 { self.id }
///     fn render_bounds(&self) -> Option<AABB> { None }
///     fn position(&self) -> Vec3 { self.position }
/// }
///
/// let marker = Marker { id: 7, position: Vec3::ONE };
/// assert_eq!(marker.world_aabb(), AABB::from_point(Vec3::ONE));
/// ```
pub trait SpatialEntity {
    /// Identity of the entity inside the index
    type Key: Copy + Eq + Hash;

    /// Key of this entity
    fn key(&self) -> Self::Key;

    /// World-space bounds of the renderable geometry, if any
    fn render_bounds(&self) -> Option<AABB>;

    /// World-space position (used when there is no renderable geometry)
    fn position(&self) -> Vec3;

    /// Extent used for placement: render bounds, or a point AABB at `position()`.
    fn world_aabb(&self) -> AABB {
        entity_world_aabb(self)
    }
}

/// Render bounds of `entity`, falling back to a degenerate point AABB.
pub fn entity_world_aabb<E: SpatialEntity + ?Sized>(entity: &E) -> AABB {
    entity
        .render_bounds()
        .unwrap_or_else(|| AABB::from_point(entity.position()))
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
