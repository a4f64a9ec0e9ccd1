//! [`SceneGraph`] over the three.js scene that `<model-viewer>` renders.
//!
//! three.js objects are reached through `js_sys::Reflect`; nodes are the raw
//! `Object3D` values and compare by identity.

use array_core::{Aabb, SceneError, SceneGraph};
use glam::Vec3;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct ThreeScene {
    three: JsValue,
    scene: JsValue,
}

fn js_err(e: JsValue) -> SceneError {
    SceneError::Backend(format!("{:?}", e))
}

fn get(obj: &JsValue, key: &str) -> Result<JsValue, SceneError> {
    Reflect::get(obj, &JsValue::from_str(key)).map_err(js_err)
}

fn set(obj: &JsValue, key: &str, value: &JsValue) -> Result<(), SceneError> {
    Reflect::set(obj, &JsValue::from_str(key), value)
        .map_err(js_err)
        .map(|_| ())
}

fn method(obj: &JsValue, name: &str) -> Result<Function, SceneError> {
    get(obj, name)?
        .dyn_into::<Function>()
        .map_err(|_| SceneError::Backend(format!("{} is not a function", name)))
}

fn present(v: JsValue) -> Option<JsValue> {
    (!v.is_undefined() && !v.is_null()).then_some(v)
}

fn read_vec3(obj: &JsValue) -> Option<Vec3> {
    let c = |k: &str| get(obj, k).ok().and_then(|v| v.as_f64()).map(|v| v as f32);
    Some(Vec3::new(c("x")?, c("y")?, c("z")?))
}

fn write_vec3(obj: &JsValue, v: Vec3) -> Result<(), SceneError> {
    method(obj, "set")?
        .call3(
            obj,
            &JsValue::from_f64(v.x as f64),
            &JsValue::from_f64(v.y as f64),
            &JsValue::from_f64(v.z as f64),
        )
        .map_err(js_err)
        .map(|_| ())
}

impl ThreeScene {
    /// Grabs the `THREE` namespace from the element's constructor and the
    /// loaded scene from `viewer.model.scene`.
    pub fn from_viewer(viewer: &web::Element) -> anyhow::Result<Self> {
        let viewer: &JsValue = viewer.as_ref();
        let three = get(viewer, "constructor")
            .and_then(|c| get(&c, "THREE"))
            .ok()
            .and_then(present)
            .ok_or_else(|| anyhow::anyhow!("viewer does not expose THREE"))?;
        let scene = get(viewer, "model")
            .and_then(|m| get(&m, "scene"))
            .ok()
            .and_then(present)
            .ok_or_else(|| anyhow::anyhow!("viewer has no loaded scene"))?;
        Ok(Self { three, scene })
    }

    fn construct(&self, class: &str) -> Result<JsValue, SceneError> {
        let ctor = method(&self.three, class)?;
        Reflect::construct(&ctor, &Array::new()).map_err(js_err)
    }
}

impl SceneGraph for ThreeScene {
    type Node = JsValue;

    fn root(&self) -> JsValue {
        self.scene.clone()
    }

    fn find_by_name(&self, name: &str) -> Option<JsValue> {
        method(&self.scene, "getObjectByName")
            .ok()?
            .call1(&self.scene, &JsValue::from_str(name))
            .ok()
            .and_then(present)
    }

    fn parent(&self, node: &JsValue) -> Option<JsValue> {
        get(node, "parent").ok().and_then(present)
    }

    fn children(&self, node: &JsValue) -> Vec<JsValue> {
        get(node, "children")
            .ok()
            .and_then(|v| v.dyn_into::<Array>().ok())
            .map(|arr| arr.iter().collect())
            .unwrap_or_default()
    }

    fn name(&self, node: &JsValue) -> String {
        get(node, "name")
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn bounding_box(&self, node: &JsValue) -> Result<Aabb, SceneError> {
        let bbox = self.construct("Box3")?;
        method(&bbox, "setFromObject")?
            .call1(&bbox, node)
            .map_err(js_err)?;
        let min = read_vec3(&get(&bbox, "min")?);
        let max = read_vec3(&get(&bbox, "max")?);
        match (min, max) {
            // An empty Box3 is (+inf, -inf), which maps onto Aabb::EMPTY.
            (Some(min), Some(max)) => Ok(Aabb { min, max }),
            _ => Err(SceneError::Backend("Box3 without min/max".into())),
        }
    }

    fn clone_subtree(&mut self, node: &JsValue) -> Result<JsValue, SceneError> {
        method(node, "clone")?.call0(node).map_err(js_err)
    }

    fn create_group(&mut self, name: &str) -> Result<JsValue, SceneError> {
        let group = self.construct("Group")?;
        set(&group, "name", &JsValue::from_str(name))?;
        Ok(group)
    }

    fn add_child(&mut self, parent: &JsValue, child: &JsValue) -> Result<(), SceneError> {
        method(parent, "add")?
            .call1(parent, child)
            .map_err(js_err)
            .map(|_| ())
    }

    fn remove_child(&mut self, parent: &JsValue, child: &JsValue) -> Result<(), SceneError> {
        method(parent, "remove")?
            .call1(parent, child)
            .map_err(js_err)
            .map(|_| ())
    }

    // Clones share geometry and materials with the template, so releasing a
    // clone only unlinks it; the GC takes the Object3D itself.
    fn dispose(&mut self, node: &JsValue) -> Result<(), SceneError> {
        match self.parent(node) {
            Some(parent) => self.remove_child(&parent, node),
            None => Ok(()),
        }
    }

    fn set_visible(&mut self, node: &JsValue, visible: bool) -> Result<(), SceneError> {
        set(node, "visible", &JsValue::from_bool(visible))
    }

    fn is_visible(&self, node: &JsValue) -> bool {
        get(node, "visible")
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    fn set_scale(&mut self, node: &JsValue, scale: Vec3) -> Result<(), SceneError> {
        write_vec3(&get(node, "scale")?, scale)
    }

    fn scale(&self, node: &JsValue) -> Vec3 {
        get(node, "scale")
            .ok()
            .and_then(|s| read_vec3(&s))
            .unwrap_or(Vec3::ONE)
    }

    fn set_position(&mut self, node: &JsValue, position: Vec3) -> Result<(), SceneError> {
        write_vec3(&get(node, "position")?, position)
    }

    fn position(&self, node: &JsValue) -> Vec3 {
        get(node, "position")
            .ok()
            .and_then(|p| read_vec3(&p))
            .unwrap_or(Vec3::ZERO)
    }
}
