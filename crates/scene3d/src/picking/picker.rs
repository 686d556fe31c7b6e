//! Ray picking over the actor tree
//!
//! Two strategies share one traversal: a cheap bounding-sphere test and an
//! exact per-triangle test. Only visible subtrees and actors with geometry
//! take part. World transforms must be current before picking.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Mat4, Vec3};
use crate::picking::{Ray, Triangle};
use crate::render::Geometry;
use crate::scene::{ActorGraph, ActorId};

/// Intersection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PickMode {
    /// Bounding spheres only, ranked by how close the ray passes to each center
    #[default]
    BoundingSphere,
    /// Exact ray-triangle intersection, ranked by distance to the hit point
    Triangles,
}

/// Exact intersection with a geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// World-space intersection point
    pub point: Vec3,
    /// World-space distance from the ray origin
    pub distance: f32,
    /// The hit triangle, in the space of its geometry part
    pub triangle: Triangle,
}

/// Result of a successful pick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Winning actor
    pub actor: ActorId,
    /// Distance from the ray origin to the sphere center or to the hit point
    pub distance: f32,
    /// Point on the ray closest to the sphere center, or the exact hit point
    pub point: Vec3,
    /// Hit triangle when picking by triangles
    pub triangle: Option<Triangle>,
}

/// Resolves a ray into the nearest actor
#[derive(Debug, Clone, Copy, Default)]
pub struct Picker {
    mode: PickMode,
}

impl Picker {
    /// Create a picker using `mode`
    pub fn new(mode: PickMode) -> Self {
        Self { mode }
    }

    /// Active strategy
    pub fn mode(&self) -> PickMode {
        self.mode
    }

    /// Change strategy
    pub fn set_mode(&mut self, mode: PickMode) {
        self.mode = mode;
    }

    /// Nearest actor at or below `root` hit by `ray`
    ///
    /// Candidates are visited parents first in child order; on equal
    /// distance the first one visited wins.
    pub fn pick(&self, graph: &ActorGraph, root: ActorId, ray: &Ray) -> Option<PickHit> {
        let mut best: Option<(f32, PickHit)> = None;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(actor) = graph.get(id) else {
                continue;
            };
            if !actor.is_visible() {
                continue;
            }
            stack.extend(actor.children().iter().rev());

            let Some(geometry) = actor.geometry() else {
                continue;
            };
            let Some(sphere) = actor.bounding_sphere() else {
                continue;
            };
            let Some(miss_sq) = sphere.pick_distance(ray) else {
                continue;
            };

            let candidate = match self.mode {
                PickMode::BoundingSphere => {
                    let to_center = sphere.center - ray.origin;
                    Some((
                        miss_sq,
                        PickHit {
                            actor: id,
                            distance: to_center.norm(),
                            point: ray.point_at(to_center.dot(&ray.direction)),
                            triangle: None,
                        },
                    ))
                }
                PickMode::Triangles => {
                    intersect_geometry(ray, geometry, actor.transform().world_matrix()).map(|hit| {
                        (
                            hit.distance * hit.distance,
                            PickHit {
                                actor: id,
                                distance: hit.distance,
                                point: hit.point,
                                triangle: Some(hit.triangle),
                            },
                        )
                    })
                }
            };

            if let Some((rank, hit)) = candidate {
                if best.as_ref().map_or(true, |(best_rank, _)| rank < *best_rank) {
                    best = Some((rank, hit));
                }
            }
        }

        let hit = best.map(|(_, hit)| hit);
        log::debug!("Pick ({:?}) resolved to {:?}", self.mode, hit.map(|h| h.actor));
        hit
    }
}

/// Closest intersection of a world-space ray with a geometry drawn at `world`
///
/// The ray is taken into each part's space through the inverse world
/// transform composed with the inverse part transform. Returns `None` for
/// empty geometry, a singular transform or a miss.
pub fn intersect_geometry(ray: &Ray, geometry: &Geometry, world: &Mat4) -> Option<TriangleHit> {
    let Some(inverse_world) = world.try_inverse() else {
        log::warn!("World transform is singular, skipping triangle test");
        return None;
    };

    let mut best: Option<TriangleHit> = None;
    for part in geometry.parts() {
        let Some(inverse_part) = part.transform.try_inverse() else {
            log::warn!("Geometry part transform is singular, skipping part");
            continue;
        };
        let Some(local_ray) = ray.transformed(&(inverse_part * inverse_world)) else {
            continue;
        };
        let part_to_world = world * part.transform;

        for triangle in part.triangles() {
            let Some((t, _, _)) = triangle.intersect_ray(&local_ray) else {
                continue;
            };
            let point = utils::transform_point(&part_to_world, &local_ray.point_at(t));
            let distance = (point - ray.origin).magnitude();
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(TriangleHit {
                    point,
                    distance,
                    triangle,
                });
            }
        }
    }
    best
}
