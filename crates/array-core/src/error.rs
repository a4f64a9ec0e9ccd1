use thiserror::Error;

/// Failures reported by a [`crate::SceneGraph`] backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("scene node no longer exists")]
    MissingNode,
    #[error("scene backend error: {0}")]
    Backend(String),
}

/// Fatal one-time setup failures. The viewer stays inert after any of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("no object named {name:?} in the scene")]
    TemplateNotFound { name: String },
    #[error("the scene root has no children to use as a template")]
    EmptyScene,
    #[error("template has degenerate bounds ({width} x {height})")]
    DegenerateTemplate { width: f32, height: f32 },
    #[error(transparent)]
    Scene(#[from] SceneError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RebuildError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("populated container has no measurable bounds")]
    EmptyBounds,
}
