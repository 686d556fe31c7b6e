//! Camera animation: relative moves, fly-to, orbit-free rotation and
//! actor following
//!
//! The rig runs once per scene update after actions have been applied and
//! world transforms refreshed, so a followed actor is tracked in the same
//! frame it moves.

use nalgebra::Rotation3;

use crate::action::{Interpolation, TweenBy, TweenTo};
use crate::foundation::math::{utils, Unit, Vec3};
use crate::render::Camera;
use crate::scene::{ActorGraph, ActorId};

/// Camera keeps a fixed offset from an actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follow {
    /// Followed actor
    pub target: ActorId,
    /// Camera position relative to the actor's world position
    pub offset: Vec3,
    /// Whether the camera also looks at the actor
    pub look_at: bool,
}

#[derive(Debug, Clone)]
struct CameraMove {
    tween: TweenBy<Vec3>,
    applied: Vec3,
}

#[derive(Debug, Clone)]
struct CameraRotation {
    axis: Unit<Vec3>,
    tween: TweenBy<f32>,
    applied: f32,
}

/// Active camera animations
#[derive(Debug, Clone, Default)]
pub struct CameraRig {
    movement: Option<CameraMove>,
    flight: Option<TweenTo<Vec3>>,
    rotation: Option<CameraRotation>,
    follow: Option<Follow>,
}

impl CameraRig {
    /// Rig with nothing running
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate position and target together by `amount`
    pub fn move_by(&mut self, amount: Vec3, duration: f32, interpolation: Interpolation) {
        let mut tween = TweenBy::new(amount, duration, interpolation);
        tween.begin(Vec3::zeros());
        self.movement = Some(CameraMove {
            tween,
            applied: Vec3::zeros(),
        });
    }

    /// Move the camera position to `position`, keeping its target
    pub fn fly_to(&mut self, camera: &Camera, position: Vec3, duration: f32, interpolation: Interpolation) {
        let mut tween = TweenTo::new(position, duration, interpolation);
        tween.begin(camera.position);
        self.flight = Some(tween);
    }

    /// Turn the view direction by `degrees` about `axis`
    ///
    /// A zero axis is ignored.
    pub fn rotate_by(&mut self, axis: Vec3, degrees: f32, duration: f32, interpolation: Interpolation) {
        let Some(axis) = Unit::try_new(axis, f32::EPSILON) else {
            log::warn!("Ignoring camera rotation about a zero axis");
            return;
        };
        let mut tween = TweenBy::new(degrees, duration, interpolation);
        tween.begin(0.0);
        self.rotation = Some(CameraRotation {
            axis,
            tween,
            applied: 0.0,
        });
    }

    /// Keep the camera at `offset` from `target`
    pub fn follow(&mut self, target: ActorId, offset: Vec3, look_at: bool) {
        self.follow = Some(Follow { target, offset, look_at });
    }

    /// Stop following
    pub fn stop_following(&mut self) {
        self.follow = None;
    }

    /// Current follow settings
    pub fn following(&self) -> Option<&Follow> {
        self.follow.as_ref()
    }

    /// Whether any tween is still running
    pub fn is_animating(&self) -> bool {
        self.movement.is_some() || self.flight.is_some() || self.rotation.is_some()
    }

    /// Cancel all tweens; following is kept
    pub fn stop(&mut self) {
        self.movement = None;
        self.flight = None;
        self.rotation = None;
    }

    /// Advance every animation by `delta` seconds
    pub fn update(&mut self, camera: &mut Camera, graph: &ActorGraph, delta: f32) {
        if let Some(movement) = self.movement.as_mut() {
            let (value, done) = movement.tween.step(delta, movement.applied);
            camera.translate(value - movement.applied);
            movement.applied = value;
            if done {
                self.movement = None;
            }
        }

        if let Some(flight) = self.flight.as_mut() {
            let (position, done) = flight.step(delta);
            camera.set_position(position);
            if done {
                self.flight = None;
            }
        }

        if let Some(rotation) = self.rotation.as_mut() {
            let (value, done) = rotation.tween.step(delta, rotation.applied);
            let turn = Rotation3::from_axis_angle(&rotation.axis, utils::deg_to_rad(value - rotation.applied));
            let forward = camera.target - camera.position;
            camera.target = camera.position + turn * forward;
            camera.up = turn * camera.up;
            rotation.applied = value;
            if done {
                self.rotation = None;
            }
        }

        if let Some(follow) = self.follow {
            match graph.get(follow.target) {
                Some(actor) => {
                    let anchor = actor.transform().world_position();
                    camera.set_position(anchor + follow.offset);
                    if follow.look_at {
                        camera.set_target(anchor);
                    }
                }
                None => {
                    log::debug!("Followed actor {:?} is gone, stop following", follow.target);
                    self.follow = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Actor, TransformNode};
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        let mut camera = Camera::perspective(Vec3::new(0.0, 0.0, 10.0), 60.0, 800.0, 600.0, 0.1, 100.0);
        camera.look_at(Vec3::zeros(), Vec3::y());
        camera
    }

    #[test]
    fn test_move_by_translates_position_and_target() {
        let graph = ActorGraph::new();
        let mut camera = camera();
        let mut rig = CameraRig::new();
        rig.move_by(Vec3::new(4.0, 0.0, 0.0), 1.0, Interpolation::Linear);

        rig.update(&mut camera, &graph, 0.5);
        assert_relative_eq!(camera.position.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(camera.target.x, 2.0, epsilon = 1e-5);
        assert!(rig.is_animating());

        rig.update(&mut camera, &graph, 0.5);
        assert_relative_eq!(camera.position, Vec3::new(4.0, 0.0, 10.0), epsilon = 1e-5);
        assert_relative_eq!(camera.target, Vec3::new(4.0, 0.0, 0.0), epsilon = 1e-5);
        assert!(!rig.is_animating());
    }

    #[test]
    fn test_fly_to_keeps_target() {
        let graph = ActorGraph::new();
        let mut camera = camera();
        let mut rig = CameraRig::new();
        rig.fly_to(&camera, Vec3::new(0.0, 10.0, 0.0), 2.0, Interpolation::Linear);

        rig.update(&mut camera, &graph, 1.0);
        assert_relative_eq!(camera.position, Vec3::new(0.0, 5.0, 5.0), epsilon = 1e-5);
        rig.update(&mut camera, &graph, 1.0);
        assert_relative_eq!(camera.position, Vec3::new(0.0, 10.0, 0.0), epsilon = 1e-5);
        assert_eq!(camera.target, Vec3::zeros());
    }

    #[test]
    fn test_rotate_by_turns_direction() {
        let graph = ActorGraph::new();
        let mut camera = camera();
        let mut rig = CameraRig::new();
        rig.rotate_by(Vec3::y(), 90.0, 0.0, Interpolation::Linear);

        rig.update(&mut camera, &graph, 0.016);
        // Looking down -Z, a quarter turn about +Y looks down -X
        assert_relative_eq!(camera.direction(), Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(camera.position, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_zero_axis_is_ignored() {
        let mut rig = CameraRig::new();
        rig.rotate_by(Vec3::zeros(), 90.0, 1.0, Interpolation::Linear);
        assert!(!rig.is_animating());
    }

    #[test]
    fn test_follow_tracks_world_position() {
        let mut graph = ActorGraph::new();
        let actor = graph.insert(
            Actor::new().with_transform(TransformNode::new().with_position(Vec3::new(3.0, 0.0, 0.0))),
        );
        graph.update_world_transforms(actor);

        let mut camera = camera();
        let mut rig = CameraRig::new();
        rig.follow(actor, Vec3::new(0.0, 2.0, 5.0), true);
        rig.update(&mut camera, &graph, 0.016);

        assert_relative_eq!(camera.position, Vec3::new(3.0, 2.0, 5.0));
        assert_relative_eq!(camera.target, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_follow_stops_when_actor_is_gone() {
        let mut graph = ActorGraph::new();
        let actor = graph.insert(Actor::new());
        graph.remove(actor);

        let mut camera = camera();
        let mut rig = CameraRig::new();
        rig.follow(actor, Vec3::zeros(), false);
        rig.update(&mut camera, &graph, 0.016);
        assert!(rig.following().is_none());
        assert_relative_eq!(camera.position, Vec3::new(0.0, 0.0, 10.0));
    }
}
