//! Arena-backed scene tree used by host tests and renderer-less hosts.
//!
//! Transforms are translation plus non-uniform scale; rotation is not
//! modelled since the arraying never rotates anything. Slots of disposed
//! nodes are reused; a generation counter makes old handles report
//! [`SceneError::MissingNode`] instead of aliasing the new occupant.

use crate::bounds::Aabb;
use crate::error::SceneError;
use crate::scene::SceneGraph;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// Whether hidden nodes contribute to [`SceneGraph::bounding_box`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundsMode {
    #[default]
    All,
    VisibleOnly,
}

#[derive(Clone, Debug)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    visible: bool,
    position: Vec3,
    scale: Vec3,
    mesh: Option<Aabb>,
}

impl Node {
    fn new(name: &str, mesh: Option<Aabb>) -> Self {
        Self {
            name: name.to_owned(),
            parent: None,
            children: SmallVec::new(),
            visible: true,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            mesh,
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Clone, Debug)]
pub struct SceneTree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    bounds_mode: BoundsMode,
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneTree {
    pub const ROOT: NodeId = NodeId {
        index: 0,
        generation: 0,
    };

    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(Node::new("Scene", None)),
            }],
            free: Vec::new(),
            bounds_mode: BoundsMode::All,
        }
    }

    pub fn with_bounds_mode(mut self, mode: BoundsMode) -> Self {
        self.bounds_mode = mode;
        self
    }

    /// Attaches a mesh node whose local geometry spans `bounds`.
    pub fn add_mesh(
        &mut self,
        parent: NodeId,
        name: &str,
        bounds: Aabb,
    ) -> Result<NodeId, SceneError> {
        let id = self.push(Node::new(name, Some(bounds)));
        self.add_child(&parent, &id)?;
        Ok(id)
    }

    pub fn add_group(&mut self, parent: NodeId, name: &str) -> Result<NodeId, SceneError> {
        let id = self.push(Node::new(name, None));
        self.add_child(&parent, &id)?;
        Ok(id)
    }

    /// Number of live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// True when `node` is alive and reachable from the root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == Self::ROOT {
                return true;
            }
            cur = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    fn push(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_ref())
    }

    fn get(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.node(id).ok_or(SceneError::MissingNode)
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.slots
            .get_mut(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_mut())
            .ok_or(SceneError::MissingNode)
    }

    /// (scale, translation) mapping `node`'s parent space to world space.
    fn parent_world(&self, node: NodeId) -> (Vec3, Vec3) {
        let mut scale = Vec3::ONE;
        let mut translation = Vec3::ZERO;
        let mut cur = self.node(node).and_then(|n| n.parent);
        while let Some(n) = cur.and_then(|id| self.node(id)) {
            // world = n.scale * (scale * p + translation) + n.position
            translation = n.scale * translation + n.position;
            scale *= n.scale;
            cur = n.parent;
        }
        (scale, translation)
    }

    fn enclose_subtree(&self, id: NodeId, scale: Vec3, translation: Vec3, out: &mut Aabb) {
        let Some(node) = self.node(id) else {
            return;
        };
        if self.bounds_mode == BoundsMode::VisibleOnly && !node.visible {
            return;
        }
        let world_scale = scale * node.scale;
        let world_translation = scale * node.position + translation;
        if let Some(mesh) = node.mesh {
            *out = out.union(&mesh.transformed(world_scale, world_translation));
        }
        for child in &node.children {
            self.enclose_subtree(*child, world_scale, world_translation, out);
        }
    }

    fn copy_subtree(&mut self, id: NodeId) -> Result<NodeId, SceneError> {
        let mut copy = self.get(id)?.clone();
        copy.parent = None;
        let children = std::mem::take(&mut copy.children);
        let new_id = self.push(copy);
        for child in children {
            let child_copy = self.copy_subtree(child)?;
            self.get_mut(child_copy)?.parent = Some(new_id);
            self.get_mut(new_id)?.children.push(child_copy);
        }
        Ok(new_id)
    }

    fn free_subtree(&mut self, id: NodeId) {
        let Some(slot) = self
            .slots
            .get_mut(id.index)
            .filter(|s| s.generation == id.generation)
        else {
            return;
        };
        let Some(node) = slot.node.take() else {
            return;
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        for child in node.children {
            self.free_subtree(child);
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    fn detach(&mut self, child: NodeId) -> Result<(), SceneError> {
        if let Some(old) = self.get_mut(child)?.parent.take() {
            self.get_mut(old)?.children.retain(|c| *c != child);
        }
        Ok(())
    }
}

impl SceneGraph for SceneTree {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        Self::ROOT
    }

    fn find_by_name(&self, name: &str) -> Option<NodeId> {
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if node.name == name {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.node(*node).and_then(|n| n.parent)
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.node(*node)
            .map(|n| n.children.to_vec())
            .unwrap_or_default()
    }

    fn name(&self, node: &NodeId) -> String {
        self.node(*node).map(|n| n.name.clone()).unwrap_or_default()
    }

    fn bounding_box(&self, node: &NodeId) -> Result<Aabb, SceneError> {
        self.get(*node)?;
        let (scale, translation) = self.parent_world(*node);
        let mut out = Aabb::EMPTY;
        self.enclose_subtree(*node, scale, translation, &mut out);
        Ok(out)
    }

    fn clone_subtree(&mut self, node: &NodeId) -> Result<NodeId, SceneError> {
        self.copy_subtree(*node)
    }

    fn create_group(&mut self, name: &str) -> Result<NodeId, SceneError> {
        Ok(self.push(Node::new(name, None)))
    }

    fn add_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), SceneError> {
        self.get(*parent)?;
        self.get(*child)?;
        if *child == Self::ROOT || self.is_ancestor_or_self(*child, *parent) {
            return Err(SceneError::Backend(format!(
                "cannot attach {:?} under {:?}",
                child, parent
            )));
        }
        self.detach(*child)?;
        self.get_mut(*child)?.parent = Some(*parent);
        self.get_mut(*parent)?.children.push(*child);
        Ok(())
    }

    fn remove_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), SceneError> {
        if self.get(*child)?.parent == Some(*parent) {
            self.detach(*child)?;
        }
        Ok(())
    }

    fn dispose(&mut self, node: &NodeId) -> Result<(), SceneError> {
        if *node == Self::ROOT {
            return Err(SceneError::Backend("cannot dispose the scene root".into()));
        }
        self.detach(*node)?;
        self.free_subtree(*node);
        Ok(())
    }

    fn set_visible(&mut self, node: &NodeId, visible: bool) -> Result<(), SceneError> {
        self.get_mut(*node)?.visible = visible;
        Ok(())
    }

    fn is_visible(&self, node: &NodeId) -> bool {
        self.node(*node).map(|n| n.visible).unwrap_or(false)
    }

    fn set_scale(&mut self, node: &NodeId, scale: Vec3) -> Result<(), SceneError> {
        self.get_mut(*node)?.scale = scale;
        Ok(())
    }

    fn scale(&self, node: &NodeId) -> Vec3 {
        self.node(*node).map(|n| n.scale).unwrap_or(Vec3::ONE)
    }

    fn set_position(&mut self, node: &NodeId, position: Vec3) -> Result<(), SceneError> {
        self.get_mut(*node)?.position = position;
        Ok(())
    }

    fn position(&self, node: &NodeId) -> Vec3 {
        self.node(*node).map(|n| n.position).unwrap_or(Vec3::ZERO)
    }
}
