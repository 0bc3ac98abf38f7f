use glam::Vec3;
use super::*;

fn unit_box() -> AABB {
    AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0))
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_point_is_degenerate() {
    let p = Vec3::new(3.0, -2.0, 7.5);
    let aabb = AABB::from_point(p);
    assert_eq!(aabb.min, p);
    assert_eq!(aabb.max, p);
    assert_eq!(aabb.center(), p);
    assert_eq!(aabb.extents(), Vec3::ZERO);
    assert!(aabb.is_valid());
}

#[test]
fn test_from_center_half_extents() {
    let aabb = AABB::from_center_half_extents(Vec3::new(10.0, 0.0, 0.0), Vec3::splat(2.0));
    assert_eq!(aabb.min, Vec3::new(8.0, -2.0, -2.0));
    assert_eq!(aabb.max, Vec3::new(12.0, 2.0, 2.0));
}

#[test]
fn test_is_valid_rejects_inverted_and_nan() {
    assert!(!AABB::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO).is_valid());
    assert!(!AABB::new(Vec3::splat(f32::NAN), Vec3::ONE).is_valid());
    assert!(!AABB::new(Vec3::ZERO, Vec3::splat(f32::INFINITY)).is_valid());
}

// ============================================================================
// Box / point tests
// ============================================================================

#[test]
fn test_contains() {
    let big = AABB::new(Vec3::splat(-10.0), Vec3::splat(10.0));
    let small = unit_box();
    let straddling = AABB::new(Vec3::splat(5.0), Vec3::splat(15.0));

    assert!(big.contains(&small));
    assert!(!small.contains(&big));
    assert!(!big.contains(&straddling));
}

#[test]
fn test_intersects_is_inclusive() {
    let a = AABB::new(Vec3::splat(-2.0), Vec3::splat(2.0));
    let b = AABB::new(Vec3::splat(1.0), Vec3::splat(3.0));
    let c = AABB::new(Vec3::splat(5.0), Vec3::splat(7.0));
    let touching = AABB::new(Vec3::new(2.0, -1.0, -1.0), Vec3::new(4.0, 1.0, 1.0));

    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert!(a.intersects(&touching));
}

#[test]
fn test_contains_point_on_surface() {
    let aabb = unit_box();
    assert!(aabb.contains_point(Vec3::new(1.0, 0.0, -1.0)));
    assert!(!aabb.contains_point(Vec3::new(1.001, 0.0, 0.0)));
}

// ============================================================================
// Ray slab test
// ============================================================================

#[test]
fn test_ray_hits_from_outside() {
    let t = unit_box().intersects_ray(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);
    assert_eq!(t, Some(4.0));
}

#[test]
fn test_ray_unnormalized_direction_scales_distance() {
    let t = unit_box().intersects_ray(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(t, Some(2.0));
}

#[test]
fn test_ray_origin_inside_returns_zero() {
    let t = unit_box().intersects_ray(Vec3::ZERO, Vec3::new(0.3, 0.5, -0.2));
    assert_eq!(t, Some(0.0));
}

#[test]
fn test_ray_pointing_away_misses() {
    assert!(unit_box().intersects_ray(Vec3::new(-5.0, 0.0, 0.0), -Vec3::X).is_none());
}

#[test]
fn test_ray_parallel_outside_slab_misses() {
    assert!(unit_box().intersects_ray(Vec3::new(-5.0, 2.0, 0.0), Vec3::X).is_none());
}

#[test]
fn test_ray_diagonal_hit_and_miss() {
    let aabb = unit_box();
    assert!(aabb.intersects_ray(Vec3::splat(-5.0), Vec3::ONE).is_some());
    assert!(aabb.intersects_ray(Vec3::new(-5.0, 3.0, 0.0), Vec3::new(1.0, 0.1, 0.0)).is_none());
}

#[test]
fn test_ray_hits_degenerate_point_box() {
    let point = AABB::from_point(Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(point.intersects_ray(Vec3::ZERO, Vec3::X), Some(3.0));
}

// ============================================================================
// Sphere test
// ============================================================================

#[test]
fn test_sphere_overlap_and_separation() {
    let aabb = unit_box();
    assert!(aabb.intersects_sphere(Vec3::ZERO, 0.1));
    assert!(aabb.intersects_sphere(Vec3::new(3.0, 0.0, 0.0), 2.0));
    assert!(!aabb.intersects_sphere(Vec3::new(3.0, 0.0, 0.0), 1.9));
}

#[test]
fn test_sphere_near_corner_uses_euclidean_distance() {
    let aabb = unit_box();
    // Corner at (1,1,1); center at (2,2,2) is sqrt(3) ~ 1.732 away
    assert!(!aabb.intersects_sphere(Vec3::splat(2.0), 1.7));
    assert!(aabb.intersects_sphere(Vec3::splat(2.0), 1.75));
}

#[test]
fn test_sphere_negative_radius_never_intersects() {
    assert!(!unit_box().intersects_sphere(Vec3::ZERO, -1.0));
}
