//! Geometry module: bounding volumes consumed by the spatial index.
//!
//! Passive value types: the octree tests node bounds against them,
//! it never stores them beyond the entity bounds cache.

mod aabb;
mod frustum;

pub use aabb::AABB;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
