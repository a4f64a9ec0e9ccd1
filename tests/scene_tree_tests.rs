// Host-side tests for the in-memory scene backend.

use array_core::*;
use glam::Vec3;

fn unit_box() -> Aabb {
    Aabb::new(Vec3::ZERO, Vec3::ONE)
}

#[test]
fn find_by_name_is_depth_first_preorder() {
    let mut scene = SceneTree::new();
    let a = scene.add_group(SceneTree::ROOT, "A").unwrap();
    let deep = scene.add_mesh(a, "Target", unit_box()).unwrap();
    let _shallow = scene.add_mesh(SceneTree::ROOT, "Target", unit_box()).unwrap();
    assert_eq!(scene.find_by_name("Target"), Some(deep));
    assert_eq!(scene.find_by_name("Scene"), Some(SceneTree::ROOT));
    assert_eq!(scene.find_by_name("target"), None);
}

#[test]
fn clone_subtree_is_deep_and_detached() {
    let mut scene = SceneTree::new();
    let model = scene.add_group(SceneTree::ROOT, "Model").unwrap();
    let mesh = scene.add_mesh(model, "Mesh", unit_box()).unwrap();
    let copy = scene.clone_subtree(&model).unwrap();

    assert_ne!(copy, model);
    assert_eq!(scene.parent(&copy), None);
    assert!(!scene.is_attached(copy));
    let kids = scene.children(&copy);
    assert_eq!(kids.len(), 1);
    assert_ne!(kids[0], mesh);
    assert_eq!(scene.name(&kids[0]), "Mesh");

    // Changing the copy leaves the original alone.
    scene.set_scale(&kids[0], Vec3::splat(3.0)).unwrap();
    assert_eq!(scene.scale(&mesh), Vec3::ONE);
}

#[test]
fn bounding_box_composes_ancestor_transforms() {
    let mut scene = SceneTree::new();
    let outer = scene.add_group(SceneTree::ROOT, "Outer").unwrap();
    let inner = scene.add_group(outer, "Inner").unwrap();
    let mesh = scene.add_mesh(inner, "Mesh", unit_box()).unwrap();
    scene.set_scale(&outer, Vec3::splat(2.0)).unwrap();
    scene.set_position(&outer, Vec3::new(10.0, 0.0, 0.0)).unwrap();
    scene.set_position(&inner, Vec3::new(0.0, 1.0, 0.0)).unwrap();

    let b = scene.bounding_box(&mesh).unwrap();
    assert_eq!(b.min, Vec3::new(10.0, 2.0, 0.0));
    assert_eq!(b.max, Vec3::new(12.0, 4.0, 2.0));
    assert_eq!(scene.bounding_box(&outer).unwrap(), b);
}

#[test]
fn bounds_mode_controls_hidden_nodes() {
    let mut scene = SceneTree::new();
    let mesh = scene.add_mesh(SceneTree::ROOT, "Mesh", unit_box()).unwrap();
    scene.set_visible(&mesh, false).unwrap();
    assert!(!scene.bounding_box(&mesh).unwrap().is_empty());

    let scene = scene.with_bounds_mode(BoundsMode::VisibleOnly);
    assert!(scene.bounding_box(&mesh).unwrap().is_empty());
}

#[test]
fn add_child_reparents_and_rejects_cycles() {
    let mut scene = SceneTree::new();
    let a = scene.add_group(SceneTree::ROOT, "A").unwrap();
    let b = scene.add_group(a, "B").unwrap();
    let c = scene.add_group(SceneTree::ROOT, "C").unwrap();

    scene.add_child(&c, &b).unwrap();
    assert_eq!(scene.parent(&b), Some(c));
    assert!(scene.children(&a).is_empty());

    assert!(scene.add_child(&b, &c).is_err());
    assert!(scene.add_child(&b, &b).is_err());
    assert!(scene.add_child(&a, &SceneTree::ROOT).is_err());
}

#[test]
fn remove_child_ignores_non_children() {
    let mut scene = SceneTree::new();
    let a = scene.add_group(SceneTree::ROOT, "A").unwrap();
    let b = scene.add_group(SceneTree::ROOT, "B").unwrap();
    scene.remove_child(&a, &b).unwrap();
    assert_eq!(scene.parent(&b), Some(SceneTree::ROOT));
    scene.remove_child(&SceneTree::ROOT, &b).unwrap();
    assert_eq!(scene.parent(&b), None);
    assert_eq!(scene.children(&SceneTree::ROOT), vec![a]);
}

#[test]
fn stale_handles_report_missing_node() {
    let mut scene = SceneTree::new();
    let mut other = SceneTree::new();
    let foreign = other.add_group(SceneTree::ROOT, "X").unwrap();
    foreign_is_missing(&mut scene, foreign);
}

fn foreign_is_missing(scene: &mut SceneTree, id: NodeId) {
    assert_eq!(scene.set_visible(&id, false), Err(SceneError::MissingNode));
    assert_eq!(scene.clone_subtree(&id), Err(SceneError::MissingNode));
    assert_eq!(scene.bounding_box(&id), Err(SceneError::MissingNode));
    assert_eq!(scene.dispose(&id), Err(SceneError::MissingNode));
}

#[test]
fn dispose_frees_whole_subtree() {
    let mut scene = SceneTree::new();
    let model = scene.add_group(SceneTree::ROOT, "Model").unwrap();
    let mesh = scene.add_mesh(model, "Mesh", unit_box()).unwrap();
    let before = scene.node_count();

    scene.dispose(&model).unwrap();
    assert_eq!(scene.node_count(), before - 2);
    assert!(scene.children(&SceneTree::ROOT).is_empty());
    assert_eq!(scene.set_visible(&model, true), Err(SceneError::MissingNode));
    assert_eq!(scene.set_visible(&mesh, true), Err(SceneError::MissingNode));
    assert_eq!(scene.find_by_name("Mesh"), None);
}

#[test]
fn reused_slots_do_not_alias_old_handles() {
    let mut scene = SceneTree::new();
    let old = scene.add_mesh(SceneTree::ROOT, "Old", unit_box()).unwrap();
    scene.dispose(&old).unwrap();
    let new = scene.add_group(SceneTree::ROOT, "New").unwrap();

    assert_ne!(old, new);
    assert_eq!(scene.name(&old), "");
    assert_eq!(scene.name(&new), "New");
    assert!(!scene.is_attached(old));
    assert_eq!(scene.add_child(&new, &old), Err(SceneError::MissingNode));
}

#[test]
fn root_cannot_be_disposed() {
    let mut scene = SceneTree::new();
    assert!(scene.dispose(&SceneTree::ROOT).is_err());
    assert!(scene.is_attached(SceneTree::ROOT));
}
