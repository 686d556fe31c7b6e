//! Headless scene3d demo
//!
//! Builds a small scene with two boxes, animates one of them through a
//! sequence, exercises groups and picking, and runs a fixed number of frames
//! through a renderer that only logs what it would draw.
//!
//! Pass a `.toml` or `.ron` scene configuration as the first argument to
//! override the default 852x480 stage.

use std::sync::Arc;

use scene3d::config::ConfigError;
use scene3d::foundation::time::FrameClock;
use scene3d::prelude::*;

const FRAMES: usize = 600;
const FRAME_DELTA: f32 = 1.0 / 60.0;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("scene: {0}")]
    Scene(#[from] SceneError),
}

/// Renderer that logs draw calls instead of submitting them
#[derive(Default)]
struct LogRenderer {
    draws: usize,
}

impl Renderer for LogRenderer {
    fn render(&mut self, world: &Mat4, geometry: &Geometry, _environment: &Environment) {
        self.draws += 1;
        log::trace!(
            "draw {} parts at ({:.2}, {:.2}, {:.2})",
            geometry.parts().len(),
            world[(0, 3)],
            world[(1, 3)],
            world[(2, 3)]
        );
    }
}

struct Demo {
    scene: Scene,
    first: ActorId,
    second: ActorId,
}

impl Demo {
    fn new(config: &SceneConfig) -> Result<Self, DemoError> {
        let mut scene = Scene::from_config(config)?;

        let first = scene.create_model(Arc::new(Geometry::cuboid(5.0, 5.0, 5.0)));
        let second = scene.create_model(Arc::new(Geometry::cuboid(2.0, 2.0, 2.0)));
        if let Some(actor) = scene.actor_mut(first) {
            actor.set_name(Some("first".to_string()));
        }
        if let Some(actor) = scene.actor_mut(second) {
            actor.set_name(Some("second".to_string()));
            actor.transform_mut().set_position(Vec3::new(10.0, 0.0, 0.0));
        }
        scene.add_actor(first)?;
        scene.add_actor(second)?;

        Ok(Self { scene, first, second })
    }

    fn animate_first(&mut self) -> Result<(), DemoError> {
        let sequence = Action::sequence([
            Action::move_by(Vec3::new(7.0, 0.0, 0.0), 2.0),
            Action::scale_to(Vec3::new(0.5, 0.5, 0.5), 5.0),
            Action::move_by(Vec3::new(-7.0, 0.0, 0.0), 2.0),
        ]);
        self.scene.add_action(self.first, sequence)?;
        Ok(())
    }

    fn group_second(&mut self) -> Result<(), DemoError> {
        let root = self.scene.root();
        let group = self
            .scene
            .add_actor_to(root, Actor::group().with_name("group"))?;
        self.scene.add_child(group, self.second)?;
        self.scene.add_actor_to(
            group,
            Actor::model(Arc::new(Geometry::cuboid(2.0, 2.0, 2.0)))
                .with_name("third")
                .with_transform(TransformNode::new().with_position(Vec3::new(7.0, 0.0, 0.0))),
        )?;
        self.scene
            .add_action(group, Action::move_to(Vec3::new(-7.0, 0.0, 0.0), 2.0))?;
        Ok(())
    }

    fn pick_center(&mut self) {
        let (width, height) = {
            let viewport = self.scene.viewport();
            (viewport.width, viewport.height)
        };
        match self.scene.pick(width / 2.0, height / 2.0) {
            Some(hit) => {
                let name = self
                    .scene
                    .actor(hit.actor)
                    .and_then(Actor::name)
                    .unwrap_or("unnamed");
                log::info!("Picked '{}' at distance {:.2}", name, hit.distance);
            }
            None => log::info!("Nothing under the screen center"),
        }
    }

    fn run(&mut self, renderer: &mut LogRenderer, clock: &mut FrameClock) {
        for frame in 0..FRAMES {
            self.scene.update(clock.advance(FRAME_DELTA));
            let stats = self.scene.draw(renderer);
            if frame % 60 == 0 {
                let scale = self
                    .scene
                    .actor(self.first)
                    .map_or(0.0, |actor| actor.transform().scale().x);
                log::info!(
                    "frame {}: {} visible, {} culled, first scale {:.3}",
                    frame,
                    stats.visible,
                    stats.culled,
                    scale
                );
            }
        }
    }
}

fn load_config() -> Result<SceneConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => Ok(SceneConfig::load_from_file(&path)?),
        None => Ok(SceneConfig::new(852.0, 480.0)),
    }
}

fn main() -> Result<(), DemoError> {
    scene3d::foundation::logging::init();
    log::info!("Starting scene3d demo");

    let config = load_config()?;
    let mut demo = Demo::new(&config)?;
    demo.animate_first()?;
    demo.group_second()?;
    log::info!("Scene tree:\n{}", demo.scene.print_tree());

    demo.pick_center();

    let mut renderer = LogRenderer::default();
    let mut clock = FrameClock::new(config.max_frame_delta);
    demo.run(&mut renderer, &mut clock);
    demo.pick_center();

    log::info!(
        "Demo finished after {} frames ({:.1}s), {} draw calls",
        clock.frame_count(),
        clock.total_time(),
        renderer.draws
    );
    Ok(())
}
