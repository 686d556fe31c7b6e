//! Ray picking
//!
//! Turns a pick ray into the nearest actor, either by bounding spheres or by
//! exact triangle intersection.

pub mod picker;
pub mod primitives;

pub use picker::{intersect_geometry, PickHit, PickMode, Picker, TriangleHit};
pub use primitives::{BoundingSphere, Ray, Triangle};
