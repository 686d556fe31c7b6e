//! Renderable geometry handles
//!
//! Geometry is stored in MODEL SPACE and never modified by the scene. The
//! renderer draws it with each actor's world transform; the picker transforms
//! pick rays into model space instead of transforming triangles out of it.

use crate::foundation::math::{utils, Mat4, Vec3};
use crate::picking::Triangle;
use crate::scene::AABB;

/// One mesh part of a geometry, with its own transform relative to the model
#[derive(Debug, Clone)]
pub struct GeometryPart {
    /// Part-to-model transform
    pub transform: Mat4,
    /// Vertex positions in part space
    pub vertices: Vec<Vec3>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl GeometryPart {
    /// Create a part with an identity transform
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            transform: Mat4::identity(),
            vertices,
            indices,
        }
    }

    /// Builder pattern: set the part transform
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Iterate the part's triangles in part space
    ///
    /// Incomplete trailing index groups and out-of-range indices are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.chunks_exact(3).filter_map(|chunk| {
            let v0 = self.vertices.get(chunk[0] as usize)?;
            let v1 = self.vertices.get(chunk[1] as usize)?;
            let v2 = self.vertices.get(chunk[2] as usize)?;
            Some(Triangle::new(*v0, *v1, *v2))
        })
    }
}

/// Model-space geometry handed to the renderer and the triangle picker
#[derive(Debug, Clone)]
pub struct Geometry {
    /// Optional label for logs
    pub name: Option<String>,
    parts: Vec<GeometryPart>,
    bounds: Option<AABB>,
}

impl Geometry {
    /// Create geometry from parts, computing the model-space bounding box
    pub fn new(parts: Vec<GeometryPart>) -> Self {
        let bounds = compute_bounds(&parts);
        Self { name: None, parts, bounds }
    }

    /// Create single-part geometry from vertices and triangle indices
    pub fn from_vertices(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self::new(vec![GeometryPart::new(vertices, indices)])
    }

    /// Geometry with no triangles at all
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Builder pattern: set a label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Axis-aligned box centered at the origin with the given full dimensions
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
        let vertices = vec![
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::new(-hx, -hy, hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(-hx, hy, hz),
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 2, 1, 0, 3, 2, // back
            4, 5, 6, 4, 6, 7, // front
            0, 1, 5, 0, 5, 4, // bottom
            3, 7, 6, 3, 6, 2, // top
            0, 4, 7, 0, 7, 3, // left
            1, 2, 6, 1, 6, 5, // right
        ];
        Self::from_vertices(vertices, indices)
    }

    /// Mesh parts
    pub fn parts(&self) -> &[GeometryPart] {
        &self.parts
    }

    /// Model-space bounding box, `None` when the geometry has no vertices
    pub fn bounds(&self) -> Option<&AABB> {
        self.bounds.as_ref()
    }

    /// Total triangle count over all parts
    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|part| part.indices.len() / 3).sum()
    }

    /// Whether there is nothing to draw or pick
    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }
}

fn compute_bounds(parts: &[GeometryPart]) -> Option<AABB> {
    let mut points = parts.iter().flat_map(|part| {
        part.vertices
            .iter()
            .map(move |vertex| utils::transform_point(&part.transform, vertex))
    });
    let first = points.next()?;
    let (min, max) = points.fold((first, first), |(min, max), p| (min.inf(&p), max.sup(&p)));
    Some(AABB::new(min, max))
}
