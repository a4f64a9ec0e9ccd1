//! Platform-independent core of the model array viewer.
//!
//! The web front-end hands a loaded scene to [`ArrayContext::initialize`] once
//! and then calls [`ArrayContext::recompute`] on every input change. Nothing in
//! here touches the DOM or a renderer; scene access goes through the
//! [`SceneGraph`] trait.

pub mod bounds;
pub mod builder;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod locator;
pub mod memory;
pub mod progress;
pub mod scene;

pub use bounds::*;
pub use builder::*;
pub use config::*;
pub use constants::*;
pub use context::*;
pub use error::*;
pub use locator::*;
pub use memory::*;
pub use progress::*;
pub use scene::*;
