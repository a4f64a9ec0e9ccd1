use crate::builder::{rebuild, ArrayLayout};
use crate::config::ArrayConfig;
use crate::constants::CONTAINER_NAME;
use crate::error::{RebuildError, SetupError};
use crate::locator::{locate, Template};
use crate::scene::SceneGraph;

/// Everything that survives between recomputes: the hidden template and the
/// group that owns the clones. Created once per loaded scene.
#[derive(Clone, Debug)]
pub struct ArrayContext<N> {
    pub template: Template<N>,
    pub container: N,
}

impl<N> ArrayContext<N> {
    /// Locates the template and attaches an empty container under the scene
    /// root. Any error leaves the scene as it was found.
    pub fn initialize<S>(scene: &mut S, template_name: Option<&str>) -> Result<Self, SetupError>
    where
        S: SceneGraph<Node = N>,
    {
        let template = locate(scene, template_name)?;
        let container = match attach_container(scene) {
            Ok(c) => c,
            Err(e) => {
                _ = scene.set_visible(&template.node, true);
                return Err(e);
            }
        };
        Ok(Self {
            template,
            container,
        })
    }

    pub fn recompute<S>(
        &self,
        scene: &mut S,
        config: &ArrayConfig,
    ) -> Result<ArrayLayout, RebuildError>
    where
        S: SceneGraph<Node = N>,
    {
        rebuild(scene, &self.template, config, &self.container)
    }
}

fn attach_container<S: SceneGraph>(scene: &mut S) -> Result<S::Node, SetupError> {
    let container = scene.create_group(CONTAINER_NAME)?;
    let root = scene.root();
    scene.add_child(&root, &container)?;
    Ok(container)
}
