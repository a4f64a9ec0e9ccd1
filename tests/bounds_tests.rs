// Host-side tests for axis-aligned bounds.

use array_core::Aabb;
use glam::Vec3;

#[test]
fn empty_box_is_union_identity() {
    let b = Aabb::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 3.0, 4.0));
    assert!(Aabb::EMPTY.is_empty());
    assert_eq!(Aabb::EMPTY.union(&b), b);
    assert_eq!(b.union(&Aabb::EMPTY), b);
    assert_eq!(Aabb::default(), Aabb::EMPTY);
}

#[test]
fn empty_box_has_zero_size() {
    assert_eq!(Aabb::EMPTY.size(), Vec3::ZERO);
    assert_eq!(Aabb::EMPTY.width(), 0.0);
    assert_eq!(Aabb::EMPTY.center(), Vec3::ZERO);
    assert!(Aabb::EMPTY.translated(Vec3::ONE).is_empty());
}

#[test]
fn new_orders_corners() {
    let b = Aabb::new(Vec3::new(1.0, 5.0, -1.0), Vec3::new(-1.0, 2.0, 1.0));
    assert_eq!(b.min, Vec3::new(-1.0, 2.0, -1.0));
    assert_eq!(b.max, Vec3::new(1.0, 5.0, 1.0));
    assert_eq!((b.width(), b.height(), b.depth()), (2.0, 3.0, 2.0));
}

#[test]
fn from_points_encloses_all() {
    let b = Aabb::from_points([
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-2.0, 0.5, 3.0),
        Vec3::new(1.0, -1.0, 1.0),
    ]);
    assert_eq!(b.min, Vec3::new(-2.0, -1.0, 0.0));
    assert_eq!(b.max, Vec3::new(1.0, 1.0, 3.0));
    assert_eq!(b.center(), Vec3::new(-0.5, 0.0, 1.5));
}

#[test]
fn transformed_scales_then_translates() {
    let b = Aabb::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
    let t = b.transformed(Vec3::splat(0.5), Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(t.min, Vec3::new(-0.5, 2.0, -0.5));
    assert_eq!(t.max, Vec3::new(0.5, 2.5, 0.5));
}

#[test]
fn transformed_with_negative_scale_stays_well_formed() {
    let b = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    let t = b.transformed(Vec3::new(-1.0, 1.0, 1.0), Vec3::ZERO);
    assert!(!t.is_empty());
    assert_eq!(t.min.x, -2.0);
    assert_eq!(t.max.x, 0.0);
}
