//! Pick primitives and intersection algorithms
//!
//! Rays, bounding spheres and triangles with the intersection tests the
//! picker needs.

use crate::foundation::math::{utils, Mat4, Vec3};

/// Half-line used for picking; `direction` is always unit length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start of the ray
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction`, which is normalized here
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point `t` units from the origin
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Transform the ray by a homogeneous matrix
    ///
    /// The direction is renormalized, so distances along the transformed ray
    /// are measured in the target space. Returns `None` if the matrix
    /// collapses the direction.
    pub fn transformed(&self, matrix: &Mat4) -> Option<Self> {
        let origin = utils::transform_point(matrix, &self.origin);
        let direction = utils::transform_vector(matrix, &self.direction);
        if direction.magnitude_squared() <= f32::EPSILON * f32::EPSILON {
            return None;
        }
        Some(Self::new(origin, direction))
    }
}

/// Sphere enclosing an actor's geometry in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// World-space center
    pub center: Vec3,
    /// Radius after the actor's world scale
    pub radius: f32,
}

impl BoundingSphere {
    /// Sphere at `center` with `radius`
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Projection pick test
    ///
    /// Rejects spheres whose center projects behind the ray origin. Otherwise
    /// returns the squared distance from the center to the closest point on
    /// the ray when it is at most `radius²`. That value ranks candidates in
    /// bounding-sphere picking.
    pub fn pick_distance(&self, ray: &Ray) -> Option<f32> {
        let along = (self.center - ray.origin).dot(&ray.direction);
        if along < 0.0 {
            return None;
        }
        let miss_sq = (self.center - ray.point_at(along)).magnitude_squared();
        (miss_sq <= self.radius * self.radius).then_some(miss_sq)
    }
}

/// Mesh triangle in the winding order of its geometry part
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner
    pub v0: Vec3,
    /// Second corner
    pub v1: Vec3,
    /// Third corner
    pub v2: Vec3,
}

impl Triangle {
    /// Triangle through three corners
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Ray hit test, double sided
    ///
    /// Möller-Trumbore: solves `origin + t * dir = v0 + u * e1 + v * e2` with
    /// Cramer's rule. Returns `(t, u, v)` when the hit lies inside the
    /// triangle and not behind the origin.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f32, f32, f32)> {
        const PARALLEL_EPSILON: f32 = 1e-6;

        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        let p = ray.direction.cross(&e2);
        let det = e1.dot(&p);
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }
        let inv_det = det.recip();

        let offset = ray.origin - self.v0;
        let u = offset.dot(&p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = offset.cross(&e1);
        let v = ray.direction.dot(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = e2.dot(&q) * inv_det;
        (t >= 0.0).then_some((t, u, v))
    }
}
