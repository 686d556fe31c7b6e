//! Draw traversal and frustum culling

use std::sync::Arc;

use super::{cube, scene};
use crate::foundation::math::{Mat4, Vec3};
use crate::render::{Environment, Geometry, Renderer};
use crate::scene::Actor;

/// Records the world translation of every draw call
#[derive(Default)]
struct RecordingRenderer {
    drawn: Vec<Vec3>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, world: &Mat4, _geometry: &Geometry, _environment: &Environment) {
        self.drawn.push(Vec3::new(world[(0, 3)], world[(1, 3)], world[(2, 3)]));
    }
}

fn move_to(scene: &mut crate::scene::Scene, actor: crate::scene::ActorId, position: Vec3) {
    scene
        .actor_mut(actor)
        .expect("actor")
        .transform_mut()
        .set_position(position);
}

#[test]
fn test_draw_culls_outside_frustum() {
    let mut scene = scene();
    let inside = cube(&mut scene);
    let behind = cube(&mut scene);
    let beyond = cube(&mut scene);
    move_to(&mut scene, inside, Vec3::new(1.0, 0.0, 0.0));
    // The default camera sits at (10, 10, 10) looking at the origin
    move_to(&mut scene, behind, Vec3::new(30.0, 30.0, 30.0));
    move_to(&mut scene, beyond, Vec3::new(-500.0, -500.0, -500.0));

    let mut renderer = RecordingRenderer::default();
    let stats = scene.draw(&mut renderer);
    assert_eq!(stats.visible, 1);
    assert_eq!(stats.culled, 2);
    assert_eq!(scene.last_draw_stats(), stats);
    assert_eq!(renderer.drawn, vec![Vec3::new(1.0, 0.0, 0.0)]);
}

#[test]
fn test_each_draw_culls_against_current_camera() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    move_to(&mut scene, actor, Vec3::new(30.0, 30.0, 30.0));

    let mut renderer = RecordingRenderer::default();
    assert_eq!(scene.draw(&mut renderer).culled, 1);

    // Turn around to face the cube from (10, 10, 10)
    scene.camera_mut().set_target(Vec3::new(30.0, 30.0, 30.0));
    let stats = scene.draw(&mut renderer);
    assert_eq!((stats.visible, stats.culled), (1, 0));
    assert_eq!(renderer.drawn, vec![Vec3::new(30.0, 30.0, 30.0)]);
}

#[test]
fn test_hidden_subtree_is_neither_drawn_nor_counted() {
    let mut scene = scene();
    let root = scene.root();
    let group = scene.add_actor_to(root, Actor::group()).expect("add");
    scene
        .add_actor_to(group, Actor::model(Arc::new(Geometry::cuboid(1.0, 1.0, 1.0))))
        .expect("add");
    scene.actor_mut(group).expect("group").set_visible(false);

    let mut renderer = RecordingRenderer::default();
    let stats = scene.draw(&mut renderer);
    assert_eq!((stats.visible, stats.culled), (0, 0));
    assert!(renderer.drawn.is_empty());
}

#[test]
fn test_draw_order_follows_child_order() {
    let mut scene = scene();
    let root = scene.root();
    let group = scene.add_actor_to(root, Actor::group()).expect("add");
    let first = cube(&mut scene);
    let nested = scene
        .add_actor_to(group, Actor::model(Arc::new(Geometry::cuboid(1.0, 1.0, 1.0))))
        .expect("add");
    move_to(&mut scene, first, Vec3::new(1.0, 0.0, 0.0));
    move_to(&mut scene, group, Vec3::new(0.0, 1.0, 0.0));
    move_to(&mut scene, nested, Vec3::new(0.0, 0.0, 1.0));

    let mut renderer = RecordingRenderer::default();
    scene.draw(&mut renderer);
    assert_eq!(renderer.drawn, vec![Vec3::new(0.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 0.0)]);
}

#[test]
fn test_update_then_draw_uses_new_positions() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene
        .add_action(actor, crate::action::Action::move_to(Vec3::new(0.0, 0.0, 2.0), 0.0))
        .expect("attach");

    scene.update(0.016);
    let mut renderer = RecordingRenderer::default();
    scene.draw(&mut renderer);
    assert_eq!(renderer.drawn, vec![Vec3::new(0.0, 0.0, 2.0)]);
}

#[test]
fn test_camera_follows_actor_after_update() {
    let mut scene = scene();
    let actor = cube(&mut scene);
    scene
        .follow_actor(actor, Vec3::new(0.0, 0.0, 5.0), true)
        .expect("follow");
    move_to(&mut scene, actor, Vec3::new(4.0, 0.0, 0.0));

    scene.update(0.016);
    assert_eq!(scene.camera().position, Vec3::new(4.0, 0.0, 5.0));
    assert_eq!(scene.camera().target, Vec3::new(4.0, 0.0, 0.0));

    scene.stop_following();
    move_to(&mut scene, actor, Vec3::zeros());
    scene.update(0.016);
    assert_eq!(scene.camera().position, Vec3::new(4.0, 0.0, 5.0));
}
