use crate::error::SetupError;
use crate::scene::SceneGraph;

/// The hidden prototype every clone is copied from, with its measured size.
#[derive(Clone, Debug, PartialEq)]
pub struct Template<N> {
    pub node: N,
    /// x-extent in scene units
    pub width: f32,
    /// y-extent in scene units
    pub height: f32,
}

/// Finds the template model root, measures it, then hides it.
///
/// With a `name`, the first depth-first match is walked up to the ancestor
/// sitting directly under the scene root, so a named sub-mesh selects its
/// whole asset. Without a name the first child of the root is used.
///
/// Bounds are taken before hiding: some backends skip invisible nodes when
/// measuring.
pub fn locate<S: SceneGraph>(
    scene: &mut S,
    name: Option<&str>,
) -> Result<Template<S::Node>, SetupError> {
    let root = scene.root();
    let node = match name {
        Some(name) => {
            let hit = scene
                .find_by_name(name)
                .filter(|n| *n != root)
                .ok_or_else(|| SetupError::TemplateNotFound {
                    name: name.to_owned(),
                })?;
            model_root(scene, hit)
        }
        None => scene
            .children(&root)
            .into_iter()
            .next()
            .ok_or(SetupError::EmptyScene)?,
    };

    let bounds = scene.bounding_box(&node)?;
    let (width, height) = (bounds.width(), bounds.height());
    if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
        return Err(SetupError::DegenerateTemplate { width, height });
    }

    scene.set_visible(&node, false)?;
    log::info!(
        "[locate] template {:?} size {:.4} x {:.4}",
        scene.name(&node),
        width,
        height
    );
    Ok(Template {
        node,
        width,
        height,
    })
}

fn model_root<S: SceneGraph>(scene: &S, node: S::Node) -> S::Node {
    let root = scene.root();
    let mut cur = node;
    while let Some(parent) = scene.parent(&cur) {
        if parent == root {
            break;
        }
        cur = parent;
    }
    cur
}
