//! # Scene Graph
//!
//! Actors, groups and the scene that owns them.
//!
//! Actors live in an arena ([`ActorGraph`]) and refer to parents and
//! children by [`ActorId`]. Any actor created with the group capability can
//! hold children. The [`Scene`] owns the root group and drives the frame:
//! actions, world transforms, culling, picking, focus and input.

pub mod actor;
pub mod camera_rig;
pub mod focus;
pub mod frustum;
pub mod graph;
pub mod stage;
pub mod transform;
pub mod viewport;

#[cfg(test)]
mod tests;

pub use actor::{Actor, ActorId};
pub use camera_rig::{CameraRig, Follow};
pub use focus::{Focus, FocusChange, FocusKinds};
pub use frustum::{Frustum, Plane, AABB};
pub use graph::{ActorGraph, ChildrenChangedHook};
pub use stage::{DrawStats, Scene};
pub use transform::{Rotation, TransformNode};
pub use viewport::Viewport;
