//! The narrow capability interface the core needs from a 3D scene backend.
//!
//! Implementations exist for the viewer's three.js scene (web front-end) and
//! for the in-memory [`crate::SceneTree`]. All lengths are scene units.

use crate::bounds::Aabb;
use crate::error::SceneError;
use glam::Vec3;
use std::fmt::Debug;

pub trait SceneGraph {
    /// Cheap handle to a node. Handles stay valid while the node is detached.
    type Node: Clone + PartialEq + Debug;

    fn root(&self) -> Self::Node;

    /// Depth-first, pre-order search (root included) for an exact,
    /// case-sensitive name match.
    fn find_by_name(&self, name: &str) -> Option<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;
    fn name(&self, node: &Self::Node) -> String;

    /// World-space bounds of `node` and all of its descendants. A node with
    /// no geometry yields [`Aabb::EMPTY`]; backend failures are errors.
    fn bounding_box(&self, node: &Self::Node) -> Result<Aabb, SceneError>;

    /// Deep, independent, detached copy of `node` and its subtree.
    fn clone_subtree(&mut self, node: &Self::Node) -> Result<Self::Node, SceneError>;
    /// Creates a new, detached, empty group.
    fn create_group(&mut self, name: &str) -> Result<Self::Node, SceneError>;

    fn add_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), SceneError>;
    fn remove_child(&mut self, parent: &Self::Node, child: &Self::Node)
        -> Result<(), SceneError>;
    /// Releases a node and its subtree. The handle is invalid afterwards.
    fn dispose(&mut self, node: &Self::Node) -> Result<(), SceneError>;

    fn set_visible(&mut self, node: &Self::Node, visible: bool) -> Result<(), SceneError>;
    fn is_visible(&self, node: &Self::Node) -> bool;

    fn set_scale(&mut self, node: &Self::Node, scale: Vec3) -> Result<(), SceneError>;
    fn scale(&self, node: &Self::Node) -> Vec3;

    fn set_position(&mut self, node: &Self::Node, position: Vec3) -> Result<(), SceneError>;
    fn position(&self, node: &Self::Node) -> Vec3;
}
