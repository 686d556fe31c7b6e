//! Scene math
//!
//! Type aliases over nalgebra plus the handful of matrix helpers the scene,
//! the camera and the picker share. Angles in the public API are degrees;
//! everything below this module works in radians.

pub use nalgebra::{Matrix4, Unit, Vector3, Vector4};

/// 3D vector
pub type Vec3 = Vector3<f32>;

/// Homogeneous 4D vector
pub type Vec4 = Vector4<f32>;

/// 4x4 homogeneous matrix
pub type Mat4 = Matrix4<f32>;

/// 3D point
pub type Point3 = nalgebra::Point3<f32>;

/// Angle constants
pub mod constants {
    /// π
    pub const PI: f32 = std::f32::consts::PI;

    /// π / 2
    pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
}

/// Free helpers on vectors and matrices
pub mod utils {
    use super::{Mat4, Point3, Vec3};

    /// Degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees.to_radians()
    }

    /// Apply `matrix` to a point (w = 1)
    pub fn transform_point(matrix: &Mat4, point: &Vec3) -> Vec3 {
        matrix.transform_point(&Point3::from(*point)).coords
    }

    /// Apply `matrix` to a direction (w = 0)
    pub fn transform_vector(matrix: &Mat4, vector: &Vec3) -> Vec3 {
        matrix.transform_vector(vector)
    }

    /// Length of the longest basis column of the upper 3x3
    ///
    /// For a TRS matrix this is the largest axis scale, which is what a
    /// bounding sphere radius has to grow by.
    pub fn max_axis_scale(matrix: &Mat4) -> f32 {
        let basis = matrix.fixed_view::<3, 3>(0, 0);
        basis
            .column_iter()
            .map(|column| column.norm())
            .fold(0.0, f32::max)
    }

    /// Translation column of a homogeneous matrix
    pub fn translation_of(matrix: &Mat4) -> Vec3 {
        matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }
}

/// Matrix constructors used by transforms and the camera
pub trait Mat4Ext {
    /// Rotation of `angle` radians about +X
    fn rotation_x(angle: f32) -> Mat4;

    /// Rotation of `angle` radians about +Y
    fn rotation_y(angle: f32) -> Mat4;

    /// Rotation of `angle` radians about +Z
    fn rotation_z(angle: f32) -> Mat4;

    /// Perspective projection of the flipped view space onto depth `[0, 1]`
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Right-handed view matrix; the eye looks down -Z
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;

    /// Flip between view space (Y up, -Z forward) and clip space (Y down,
    /// +Z forward)
    fn clip_axis_flip() -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_scaled_axis(Vec3::x() * angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_scaled_axis(Vec3::y() * angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_scaled_axis(Vec3::z() * angle)
    }

    #[rustfmt::skip]
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let focal = 1.0 / (fov_y * 0.5).tan();
        let depth = far / (far - near);
        Mat4::new(
            focal / aspect, 0.0,   0.0,   0.0,
            0.0,            focal, 0.0,   0.0,
            0.0,            0.0,   depth, -near * depth,
            0.0,            0.0,   1.0,   0.0,
        )
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }

    fn clip_axis_flip() -> Mat4 {
        Mat4::from_diagonal(&Vec4::new(1.0, -1.0, -1.0, 1.0))
    }
}
