/// Frustum: six clipping planes for visibility queries.
///
/// Each plane is a Vec4 (A, B, C, D): (A, B, C) is the inward-pointing
/// unit normal and D the signed offset. A point P is inside when
/// `dot(plane, (P, 1)) >= 0` for all six planes.

use glam::{Mat4, Vec3, Vec4};
use super::aabb::AABB;

/// Result of a 3-way frustum/AABB classification.
///
/// - `Outside` → skip the entire subtree
/// - `Inside` → every descendant is visible, no further plane tests
/// - `Partial` → keep testing children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB partially overlaps the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes, normals pointing inward.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Build a frustum from six planes, normalizing each one.
    ///
    /// Planes with a zero-length normal are kept as-is.
    pub fn from_planes(mut planes: [Vec4; 6]) -> Self {
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }
        Self { planes }
    }

    /// Extract frustum planes from a view-projection matrix
    /// (Gribb & Hartmann). Works for perspective and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        Self::from_planes([
            row3 + row0, // left
            row3 - row0, // right
            row3 + row1, // bottom
            row3 - row1, // top
            row3 + row2, // near
            row3 - row2, // far
        ])
    }

    /// Corner of the box furthest along `normal`.
    fn positive_vertex(normal: Vec3, aabb: &AABB) -> Vec3 {
        Vec3::select(normal.cmpge(Vec3::ZERO), aabb.max, aabb.min)
    }

    /// Corner of the box furthest against `normal`.
    fn negative_vertex(normal: Vec3, aabb: &AABB) -> Vec3 {
        Vec3::select(normal.cmpge(Vec3::ZERO), aabb.min, aabb.max)
    }

    /// Conservative AABB test: may report false positives near frustum
    /// corners, never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            normal.dot(Self::positive_vertex(normal, aabb)) + plane.w >= 0.0
        })
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// `Outside` as soon as a positive vertex is behind a plane;
    /// `Inside` only if every negative vertex is in front of every plane.
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            if normal.dot(Self::positive_vertex(normal, aabb)) + plane.w < 0.0 {
                return FrustumTest::Outside;
            }

            if normal.dot(Self::negative_vertex(normal, aabb)) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
