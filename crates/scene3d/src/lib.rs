//! # scene3d
//!
//! A retained-mode 3D scene graph with composable actions and ray picking.
//!
//! ## Features
//!
//! - **Actor Tree**: Arena-backed actors and groups with cached world transforms
//! - **Actions**: Poolable tweens, sequences, parallels, repeats and delegates
//! - **Picking**: Bounding-sphere and exact per-triangle ray picking
//! - **Focus & Events**: Keyboard/scroll/selection focus with bubbling listeners
//! - **Rendering Seam**: Frustum-culled draw traversal through a `Renderer` trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use scene3d::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     let mut scene = Scene::from_config(&SceneConfig::new(800.0, 600.0))?;
//!     let cube = scene.create_model(Arc::new(Geometry::cuboid(1.0, 1.0, 1.0)));
//!     scene.add_actor(cube)?;
//!     scene.add_action(cube, Action::sequence([
//!         Action::move_by(Vec3::new(2.0, 0.0, 0.0), 1.0),
//!         Action::rotate_by(90.0, 0.5),
//!     ]))?;
//!
//!     for _ in 0..60 {
//!         scene.update_clamped(1.0 / 60.0);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod action;
pub mod config;
pub mod error;
pub mod events;
pub mod foundation;
pub mod picking;
pub mod render;
pub mod scene;

pub use error::{SceneError, SceneResult};

/// Common imports for scene users
pub mod prelude {
    pub use crate::{
        action::{Action, ActionContext, ActionId, ActionPool, Interpolation},
        config::{CameraConfig, Config, SceneConfig},
        events::{shared, EventKind, Listener, SceneEvent, SharedListener},
        foundation::math::{Mat4, Vec3},
        picking::{PickHit, PickMode, Ray},
        render::{Camera, DirectionalLight, Environment, Geometry, Renderer, Viewer},
        scene::{Actor, ActorId, DrawStats, FocusKinds, Scene, TransformNode},
        SceneError, SceneResult,
    };
}
