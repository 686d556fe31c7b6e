//! # 3D Camera
//!
//! Perspective camera used by the scene for culling and by the picker for
//! pick rays. The camera only does math; it never talks to a GPU.
//!
//! ## Coordinate System
//! Right-handed, Y-up world and view space. The projection chain is
//! `P × F × V` where `F` flips Y and Z so clip space is Y-down with depth in
//! `[0, 1]`. Screen coordinates are pixels from the top-left corner of the
//! viewport.

use crate::config::CameraConfig;
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3, Vec4};
use crate::picking::Ray;
use crate::render::Viewer;
use crate::scene::Frustum;

/// Perspective camera looking from `position` at `target`
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye point, world space
    pub position: Vec3,

    /// Look-at point, world space
    pub target: Vec3,

    /// World direction that appears upward on screen
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Viewport width over height
    pub aspect: f32,

    /// Near clip distance, greater than zero
    pub near: f32,

    /// Far clip distance, greater than `near`
    pub far: f32,

    /// Viewport width in pixels, used to turn screen points into rays
    pub viewport_width: f32,

    /// Viewport height in pixels
    pub viewport_height: f32,
}

impl Camera {
    /// Camera at `position` aimed at the origin with +Y up
    ///
    /// `fov_degrees` is the vertical field of view. The aspect ratio comes
    /// from the viewport size.
    pub fn perspective(
        position: Vec3,
        fov_degrees: f32,
        viewport_width: f32,
        viewport_height: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: utils::deg_to_rad(fov_degrees),
            aspect: aspect_of(viewport_width, viewport_height),
            near,
            far,
            viewport_width,
            viewport_height,
        }
    }

    /// Create a camera from configuration and a viewport size
    pub fn from_config(config: &CameraConfig, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self::perspective(
            config.position,
            config.fov_degrees,
            viewport_width,
            viewport_height,
            config.near,
            config.far,
        );
        camera.look_at(config.target, config.up);
        camera
    }

    /// Move the eye; the target stays where it is
    pub fn set_position(&mut self, position: Vec3) {
        log::trace!("camera eye -> {:?}", position);
        self.position = position;
    }

    /// Aim at a new point from the current eye
    pub fn set_target(&mut self, target: Vec3) {
        log::trace!("camera target -> {:?}", target);
        self.target = target;
    }

    /// Aim at `target` and replace the up direction
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        log::trace!("camera look_at {:?}, up {:?}", target, up);
        self.target = target;
        self.up = up;
    }

    /// Move position and target together
    pub fn translate(&mut self, amount: Vec3) {
        self.position += amount;
        self.target += amount;
    }

    /// Resize the viewport and recompute the aspect ratio
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        let aspect = aspect_of(width, height);
        if (aspect - self.aspect).abs() > 0.01 {
            log::debug!("camera aspect {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.viewport_width = width;
        self.viewport_height = height;
        self.aspect = aspect;
    }

    /// Unit vector from the camera position towards its target
    pub fn direction(&self) -> Vec3 {
        let forward = self.target - self.position;
        if forward.magnitude_squared() > f32::EPSILON {
            forward.normalize()
        } else {
            Vec3::new(0.0, 0.0, -1.0)
        }
    }

    /// World to view space
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// View to clip space, before the axis flip
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Full world to clip chain `P × F × V`
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * Mat4::clip_axis_flip() * self.view_matrix()
    }

    /// Extract the view frustum from the current view-projection matrix
    pub fn frustum(&self) -> Frustum {
        Frustum::from_matrix(&self.view_projection_matrix())
    }

    /// Convert normalized device coordinates to a world-space ray
    ///
    /// `ndc_x` runs -1 (left) to 1 (right), `ndc_y` runs -1 (top) to 1
    /// (bottom). Returns `None` when the camera matrices are degenerate.
    pub fn ndc_to_world_ray(&self, ndc_x: f32, ndc_y: f32) -> Option<Ray> {
        let Some(inv_view_proj) = self.view_projection_matrix().try_inverse() else {
            log::warn!("View-projection matrix is not invertible, no pick ray");
            return None;
        };

        let near_h = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far_h = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        if near_h.w.abs() < f32::EPSILON || far_h.w.abs() < f32::EPSILON {
            return None;
        }

        let world_near = near_h.xyz() / near_h.w;
        let world_far = far_h.xyz() / far_h.w;
        let direction = world_far - world_near;
        if direction.magnitude_squared() < f32::EPSILON {
            return None;
        }

        Some(Ray::new(self.position, direction))
    }

    /// Convert a pixel position in the viewport into normalized device coordinates
    pub fn screen_to_ndc(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        let ndc_x = (screen_x / self.viewport_width) * 2.0 - 1.0;
        let ndc_y = (screen_y / self.viewport_height) * 2.0 - 1.0;
        (ndc_x, ndc_y)
    }
}

impl Viewer for Camera {
    fn pick_ray(&self, screen_x: f32, screen_y: f32) -> Option<Ray> {
        let (ndc_x, ndc_y) = self.screen_to_ndc(screen_x, screen_y);
        self.ndc_to_world_ray(ndc_x, ndc_y)
    }

    fn frustum_contains(&self, center: &Vec3, radius: f32) -> bool {
        self.frustum().intersects_sphere(center, radius)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 852.0, 480.0)
    }
}

fn aspect_of(width: f32, height: f32) -> f32 {
    if height > 0.0 {
        width / height
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn front_camera() -> Camera {
        let mut camera = Camera::perspective(Vec3::new(0.0, 0.0, 10.0), 60.0, 800.0, 600.0, 0.1, 100.0);
        camera.look_at(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));
        camera
    }

    #[test]
    fn test_center_pick_ray_points_at_target() {
        let camera = front_camera();
        let ray = camera.pick_ray(400.0, 300.0).unwrap();
        assert_relative_eq!(ray.origin, Vec3::new(0.0, 0.0, 10.0));
        assert_relative_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-4);
    }

    #[test]
    fn test_top_of_screen_ray_points_up() {
        let camera = front_camera();
        let ray = camera.pick_ray(400.0, 0.0).unwrap();
        assert!(ray.direction.y > 0.0);
        let ray = camera.pick_ray(800.0, 300.0).unwrap();
        assert!(ray.direction.x > 0.0);
    }

    #[test]
    fn test_frustum_contains() {
        let camera = front_camera();
        assert!(camera.frustum_contains(&Vec3::zeros(), 1.0));
        // Behind the camera
        assert!(!camera.frustum_contains(&Vec3::new(0.0, 0.0, 20.0), 1.0));
        // Beyond the far plane
        assert!(!camera.frustum_contains(&Vec3::new(0.0, 0.0, -200.0), 1.0));
        // Far off to the side
        assert!(!camera.frustum_contains(&Vec3::new(100.0, 0.0, 0.0), 1.0));
    }
}
