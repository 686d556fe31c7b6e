//! Bounding volumes and view-frustum culling
//!
//! The draw traversal asks the camera whether an actor's world bounding
//! sphere is inside the view frustum; the frustum itself is extracted from
//! the camera's view-projection matrix here.

use crate::foundation::math::{Mat4, Vec3, Vec4};

/// Box bounds of a geometry in its local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Smallest coordinate on every axis
    pub min: Vec3,
    /// Largest coordinate on every axis
    pub max: Vec3,
}

impl AABB {
    /// Box spanning `min` to `max`
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Midpoint between the two corners
    pub fn center(&self) -> Vec3 {
        self.min.lerp(&self.max, 0.5)
    }

    /// Distance between the two corners
    pub fn diagonal(&self) -> f32 {
        self.min.metric_distance(&self.max)
    }
}

/// Normalized plane `normal . p + offset = 0`; the positive side is inside
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal, pointing inside
    pub normal: Vec3,
    /// Signed offset from the origin
    pub offset: f32,
}

impl Plane {
    /// Build from raw `(a, b, c, d)` coefficients
    ///
    /// Degenerate coefficients produce a plane that accepts everything.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let length = coefficients.xyz().norm();
        if length <= f32::EPSILON {
            return Self { normal: Vec3::zeros(), offset: 0.0 };
        }
        let scaled = coefficients / length;
        Self { normal: scaled.xyz(), offset: scaled.w }
    }

    /// Positive inside, negative outside
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.offset
    }
}

/// Six inward-facing clip planes: left, right, bottom, top, near, far
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Clip planes in extraction order
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix
    ///
    /// Gribb-Hartmann extraction for a clip space with depth in `[0, 1]`.
    pub fn from_matrix(view_projection: &Mat4) -> Self {
        let row = |i: usize| {
            Vec4::new(
                view_projection[(i, 0)],
                view_projection[(i, 1)],
                view_projection[(i, 2)],
                view_projection[(i, 3)],
            )
        };
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        Self {
            planes: [
                Plane::from_coefficients(r3 + r0),
                Plane::from_coefficients(r3 - r0),
                Plane::from_coefficients(r3 + r1),
                Plane::from_coefficients(r3 - r1),
                Plane::from_coefficients(r2),
                Plane::from_coefficients(r3 - r2),
            ],
        }
    }

    /// True unless the sphere lies entirely behind one of the planes
    pub fn intersects_sphere(&self, center: &Vec3, radius: f32) -> bool {
        !self
            .planes
            .iter()
            .any(|plane| plane.signed_distance(center) < -radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4Ext;

    fn test_frustum() -> Frustum {
        // Camera at the origin looking down -Z
        let view = Mat4::look_at(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0), Vec3::y());
        let projection = Mat4::perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 50.0);
        Frustum::from_matrix(&(projection * Mat4::clip_axis_flip() * view))
    }

    #[test]
    fn test_aabb_center_and_diagonal() {
        let aabb = AABB::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0));
        assert!((aabb.center() - Vec3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
        assert!((aabb.diagonal() - 12.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_in_front_is_visible() {
        let frustum = test_frustum();
        assert!(frustum.intersects_sphere(&Vec3::new(0.0, 0.0, -10.0), 1.0));
    }

    #[test]
    fn test_sphere_straddling_near_plane_is_visible() {
        let frustum = test_frustum();
        assert!(frustum.intersects_sphere(&Vec3::new(0.0, 0.0, -0.5), 1.0));
        assert!(!frustum.intersects_sphere(&Vec3::new(0.0, 0.0, 5.0), 1.0));
    }

    #[test]
    fn test_sphere_outside_side_plane_is_culled() {
        let frustum = test_frustum();
        // 90 degree fov: at depth 10 the half width is 10
        assert!(!frustum.intersects_sphere(&Vec3::new(15.0, 0.0, -10.0), 1.0));
        assert!(frustum.intersects_sphere(&Vec3::new(10.5, 0.0, -10.0), 1.0));
    }
}
