//! Rendering collaborators
//!
//! The scene never rasterizes anything itself. During `Scene::draw` it hands
//! each visible model's world transform, geometry and the scene environment to
//! a [`Renderer`]; the [`Viewer`] supplies pick rays and frustum tests.

pub mod camera;
pub mod geometry;

pub use camera::Camera;
pub use geometry::{Geometry, GeometryPart};

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Mat4, Vec3};
use crate::picking::Ray;

/// Backend that draws geometry
///
/// Called once per visible model per frame. Implementations own all GPU-side
/// state and must not reach back into the scene.
pub trait Renderer {
    /// Draw `geometry` with the given world transform and lighting environment
    fn render(&mut self, world: &Mat4, geometry: &Geometry, environment: &Environment);
}

/// Camera and input collaborator
pub trait Viewer {
    /// Ray from the eye through a pixel of the viewport, `None` when degenerate
    fn pick_ray(&self, screen_x: f32, screen_y: f32) -> Option<Ray>;

    /// Whether a world-space sphere is at least partially inside the view frustum
    fn frustum_contains(&self, center: &Vec3, radius: f32) -> bool;
}

/// Directional light
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionalLight {
    /// Light color (RGB, linear)
    pub color: [f32; 3],
    /// Direction the light travels in
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a directional light
    pub fn new(color: [f32; 3], direction: Vec3) -> Self {
        Self { color, direction }
    }
}

/// Lighting environment handed through to the renderer untouched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Environment {
    /// Ambient light color (RGB, linear)
    pub ambient: [f32; 3],
    /// Directional lights
    pub lights: Vec<DirectionalLight>,
}

impl Environment {
    /// Environment with ambient light only
    pub fn ambient(color: [f32; 3]) -> Self {
        Self { ambient: color, lights: Vec::new() }
    }

    /// Builder pattern: add a directional light
    pub fn with_light(mut self, light: DirectionalLight) -> Self {
        self.lights.push(light);
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::ambient([0.4, 0.4, 0.4])
            .with_light(DirectionalLight::new([0.8, 0.8, 0.8], Vec3::new(-1.0, -0.8, -0.2)))
    }
}
