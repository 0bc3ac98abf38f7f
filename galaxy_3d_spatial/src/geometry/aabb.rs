/// AABB: axis-aligned bounding box in world space.
///
/// Used for every intersection test in the spatial index: node bounds,
/// entity extents and box queries. All tests are inclusive (touching
/// boxes intersect), which is what makes a point on a split plane
/// match two octants.

use glam::Vec3;

/// Directions with an absolute component below this are treated as
/// parallel to the corresponding slab.
const RAY_PARALLEL_EPSILON: f32 = 1e-8;

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Create a box from its two corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Degenerate box covering a single point.
    ///
    /// Used for entities without renderable geometry.
    pub fn from_point(point: Vec3) -> Self {
        Self { min: point, max: point }
    }

    /// Box centered on `center` with the given half extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Geometric center.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size along each axis.
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Finite corners with `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if a point lies inside or on the surface.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Slab test against the half-line `origin + t * direction`, `t >= 0`.
    ///
    /// Returns the entry distance `t` (in units of `direction`), or `0.0`
    /// when the origin is inside the box. `direction` need not be normalized.
    pub fn intersects_ray(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let mut t_min = 0.0f32;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < RAY_PARALLEL_EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv_d = 1.0 / d;
            let mut t1 = (lo - o) * inv_d;
            let mut t2 = (hi - o) * inv_d;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }

            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }

    /// Test against a sphere using the closest point of the box.
    ///
    /// A negative radius never intersects.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        if radius < 0.0 {
            return false;
        }
        let closest = center.max(self.min).min(self.max);
        closest.distance_squared(center) <= radius * radius
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
