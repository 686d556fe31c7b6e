//! Per-actor transform state
//!
//! Follows a Y-up right-handed convention. Every mutator recomputes the local
//! matrix before returning, so the matrix is never read stale. The world
//! matrix is composed top-down by the scene once per frame and before
//! picking.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Rotation mode of a transform
///
/// A transform either rotates by a single angle about +Y or by yaw, pitch and
/// roll. The two modes do not combine: whichever setter ran last wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    /// Single angle in degrees about the +Y axis
    Angle(f32),
    /// Yaw (about Y), pitch (about X) and roll (about Z) in degrees
    Euler {
        /// Degrees about Y
        yaw: f32,
        /// Degrees about X
        pitch: f32,
        /// Degrees about Z
        roll: f32,
    },
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Angle(0.0)
    }
}

impl Rotation {
    /// Rotation matrix for this mode
    pub fn to_matrix(&self) -> Mat4 {
        match *self {
            Self::Angle(degrees) => Mat4::rotation_y(utils::deg_to_rad(degrees)),
            Self::Euler { yaw, pitch, roll } => {
                Mat4::rotation_y(utils::deg_to_rad(yaw))
                    * Mat4::rotation_x(utils::deg_to_rad(pitch))
                    * Mat4::rotation_z(utils::deg_to_rad(roll))
            }
        }
    }
}

/// Position, pivot, scale and rotation of one actor plus its derived matrices
#[derive(Debug, Clone, PartialEq)]
pub struct TransformNode {
    position: Vec3,
    origin: Vec3,
    scale: Vec3,
    rotation: Rotation,
    local: Mat4,
    world: Mat4,
}

impl Default for TransformNode {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            origin: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation: Rotation::default(),
            local: Mat4::identity(),
            world: Mat4::identity(),
        }
    }
}

impl TransformNode {
    /// Identity transform
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.set_position(position);
        self
    }

    /// Position relative to the parent
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.recompute_local();
    }

    /// Move by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
        self.recompute_local();
    }

    /// Set the X coordinate
    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
        self.recompute_local();
    }

    /// Set the Y coordinate
    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
        self.recompute_local();
    }

    /// Set the Z coordinate
    pub fn set_z(&mut self, z: f32) {
        self.position.z = z;
        self.recompute_local();
    }

    /// Pivot for rotation and scale
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Set the pivot for rotation and scale
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
        self.recompute_local();
    }

    /// Per-axis scale
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set the per-axis scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.recompute_local();
    }

    /// Set the same scale on every axis
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.set_scale(Vec3::new(scale, scale, scale));
    }

    /// Add to the current scale
    pub fn scale_by(&mut self, amount: Vec3) {
        self.scale += amount;
        self.recompute_local();
    }

    /// Rotation mode and values
    pub fn rotation_mode(&self) -> Rotation {
        self.rotation
    }

    /// Scalar rotation in degrees: the angle in angle mode, the yaw in Euler mode
    pub fn rotation(&self) -> f32 {
        match self.rotation {
            Rotation::Angle(degrees) => degrees,
            Rotation::Euler { yaw, .. } => yaw,
        }
    }

    /// Switch to angle mode with the given angle in degrees
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = Rotation::Angle(degrees);
        self.recompute_local();
    }

    /// Add degrees to the scalar rotation, keeping the current mode
    pub fn rotate(&mut self, degrees: f32) {
        let current = self.rotation();
        self.set_yaw(current + degrees);
    }

    /// Switch to Euler mode with yaw, pitch and roll in degrees
    pub fn set_euler_rotation(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.rotation = Rotation::Euler { yaw, pitch, roll };
        self.recompute_local();
    }

    /// Set the scalar rotation without changing the rotation mode
    pub(crate) fn set_yaw(&mut self, degrees: f32) {
        match &mut self.rotation {
            Rotation::Angle(angle) => *angle = degrees,
            Rotation::Euler { yaw, .. } => *yaw = degrees,
        }
        self.recompute_local();
    }

    /// Local-to-parent matrix, always consistent with the fields
    pub fn local_matrix(&self) -> &Mat4 {
        &self.local
    }

    /// Local-to-world matrix as of the last world transform pass
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world
    }

    /// World-space position as of the last world transform pass
    pub fn world_position(&self) -> Vec3 {
        utils::translation_of(&self.world)
    }

    pub(crate) fn set_world(&mut self, world: Mat4) {
        self.world = world;
    }

    /// `T(position) · T(origin) · R · S · T(-origin)`
    fn recompute_local(&mut self) {
        self.local = Mat4::new_translation(&(self.position + self.origin))
            * self.rotation.to_matrix()
            * Mat4::new_nonuniform_scaling(&self.scale)
            * Mat4::new_translation(&-self.origin);
        log::trace!("Local transform recomputed: position={:?} scale={:?}", self.position, self.scale);
    }
}
