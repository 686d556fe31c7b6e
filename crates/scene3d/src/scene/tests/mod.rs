//! Scenario tests running the scene, actions and picker together

mod actions;
mod rendering;

use std::sync::Arc;

use crate::render::Geometry;
use crate::scene::{ActorId, Scene};

/// Scene with logging for tests
fn scene() -> Scene {
    crate::foundation::logging::try_init_for_tests();
    Scene::new()
}

/// Unit cube attached to the root
fn cube(scene: &mut Scene) -> ActorId {
    let id = scene.create_model(Arc::new(Geometry::cuboid(1.0, 1.0, 1.0)));
    scene.add_actor(id).expect("attach cube");
    id
}

/// Run `steps` updates of `delta` seconds
fn run(scene: &mut Scene, delta: f32, steps: usize) {
    for _ in 0..steps {
        scene.act(delta);
    }
}
