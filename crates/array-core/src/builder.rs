use crate::bounds::Aabb;
use crate::config::ArrayConfig;
use crate::error::RebuildError;
use crate::locator::Template;
use crate::scene::SceneGraph;
use glam::Vec3;

/// Upper bound on clones per rebuild; keeps a stray huge input from freezing the page.
pub const MAX_CLONES: usize = 10_000;

/// Scale and repeat count for one rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayPlan {
    pub scale: f32,
    pub scaled_height: f32,
    pub count: usize,
}

impl ArrayPlan {
    /// y offset of clone `index` before the container is recentred.
    #[inline]
    pub fn offset_y(&self, index: usize) -> f32 {
        index as f32 * self.scaled_height
    }

    /// Total stacked height in scene units.
    pub fn total_height(&self) -> f32 {
        self.count as f32 * self.scaled_height
    }
}

/// Width is matched by uniform scaling; height by repetition, rounded to the
/// nearest whole clone with a floor of one.
pub fn plan(template_width: f32, template_height: f32, config: &ArrayConfig) -> ArrayPlan {
    let scale = config.desired_width / template_width;
    let scaled_height = template_height * scale;
    let ratio = (config.desired_height / scaled_height).round();
    if ratio > MAX_CLONES as f32 {
        log::warn!("[array] {} clones requested, capping at {}", ratio, MAX_CLONES);
    }
    // f32::max discards NaN, so a degenerate ratio still yields one clone
    let count = ratio.max(1.0).min(MAX_CLONES as f32) as usize;
    ArrayPlan {
        scale,
        scaled_height,
        count,
    }
}

/// Outcome of a rebuild, mostly for logging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayLayout {
    pub plan: ArrayPlan,
    pub container_offset: Vec3,
    /// World bounds of the populated container after recentring.
    pub bounds: Aabb,
}

/// Tears down every clone in `container` and rebuilds the stack for `config`.
///
/// Afterwards the container holds exactly `plan.count` clones, its bounds rest
/// on y = 0 and are centred on the origin in x and z.
pub fn rebuild<S: SceneGraph>(
    scene: &mut S,
    template: &Template<S::Node>,
    config: &ArrayConfig,
    container: &S::Node,
) -> Result<ArrayLayout, RebuildError> {
    for child in scene.children(container) {
        scene.remove_child(container, &child)?;
        scene.dispose(&child)?;
    }

    let plan = plan(template.width, template.height, config);
    for i in 0..plan.count {
        let copy = scene.clone_subtree(&template.node)?;
        scene.set_visible(&copy, true)?;
        // Template measurements already include its own scale.
        let scale = scene.scale(&copy) * plan.scale;
        scene.set_scale(&copy, scale)?;
        let mut pos = scene.position(&copy);
        pos.y = plan.offset_y(i);
        scene.set_position(&copy, pos)?;
        scene.add_child(container, &copy)?;
    }

    scene.set_position(container, Vec3::ZERO)?;
    let raw = scene.bounding_box(container)?;
    if raw.is_empty() {
        return Err(RebuildError::EmptyBounds);
    }
    let center = raw.center();
    let container_offset = Vec3::new(-center.x, -raw.min.y, -center.z);
    scene.set_position(container, container_offset)?;

    let layout = ArrayLayout {
        plan,
        container_offset,
        bounds: raw.translated(container_offset),
    };
    log::debug!(
        "[array] count={} scale={:.4} step={:.4} total={:.4} offset=({:.3},{:.3},{:.3})",
        plan.count,
        plan.scale,
        plan.scaled_height,
        plan.total_height(),
        container_offset.x,
        container_offset.y,
        container_offset.z
    );
    Ok(layout)
}
