//! # Scene
//!
//! Owns the actor tree, the attached actions and everything needed to run a
//! frame: `update` advances actions and the camera rig, `draw` hands every
//! visible model inside the view frustum to a [`Renderer`].
//!
//! Structural changes go through the scene rather than the graph so focus
//! references never outlive the subtree they point into.

use std::sync::Arc;

use slotmap::SlotMap;

use crate::action::{Action, ActionContext, ActionId, ActionPool, ActionSlot, Interpolation};
use crate::config::SceneConfig;
use crate::error::{SceneError, SceneResult};
use crate::events::{EventKind, SceneEvent};
use crate::foundation::math::Vec3;
use crate::foundation::time::clamp_delta;
use crate::picking::{PickHit, PickMode, Picker, Ray};
use crate::render::{Camera, Environment, Geometry, Renderer, Viewer};
use crate::scene::{
    Actor, ActorGraph, ActorId, CameraRig, ChildrenChangedHook, Focus, FocusChange, FocusKinds, Viewport,
};

/// Per-draw culling counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    /// Models handed to the renderer
    pub visible: usize,
    /// Models rejected by the frustum test
    pub culled: usize,
}

/// Root container of an actor tree
pub struct Scene {
    graph: ActorGraph,
    root: ActorId,
    actions: SlotMap<ActionId, ActionSlot>,
    pool: ActionPool,
    camera: Camera,
    environment: Environment,
    viewport: Viewport,
    focus: Focus,
    rig: CameraRig,
    picker: Picker,
    hit_testing: bool,
    max_frame_delta: f32,
    last_draw_stats: DrawStats,
}

impl Scene {
    /// Scene built from the default configuration
    pub fn new() -> Self {
        Self::build(&SceneConfig::default())
    }

    /// Scene built from a validated configuration
    ///
    /// # Errors
    /// `Config` when the configuration fails validation.
    pub fn from_config(config: &SceneConfig) -> SceneResult<Self> {
        config.validate()?;
        log::info!(
            "Creating scene: stage {}x{}, device {}x{}, keep aspect {}",
            config.stage_width,
            config.stage_height,
            config.device_width,
            config.device_height,
            config.keep_aspect_ratio
        );
        Ok(Self::build(config))
    }

    fn build(config: &SceneConfig) -> Self {
        let viewport = Viewport::compute(
            config.stage_width,
            config.stage_height,
            config.keep_aspect_ratio,
            config.device_width,
            config.device_height,
        );
        let mut graph = ActorGraph::new();
        let root = graph.insert(Actor::group().with_name("root"));
        graph.mark_root(root);

        Self {
            graph,
            root,
            actions: SlotMap::with_key(),
            pool: ActionPool::new(config.action_pool_capacity),
            camera: Camera::from_config(&config.camera, viewport.width, viewport.height),
            environment: config.environment.clone(),
            viewport,
            focus: Focus::default(),
            rig: CameraRig::new(),
            picker: Picker::new(config.pick_mode),
            hit_testing: config.hit_testing,
            max_frame_delta: config.max_frame_delta,
            last_draw_stats: DrawStats::default(),
        }
    }

    /// Root group
    pub fn root(&self) -> ActorId {
        self.root
    }

    /// The actor arena
    pub fn graph(&self) -> &ActorGraph {
        &self.graph
    }

    /// The actor arena, mutably
    pub fn graph_mut(&mut self) -> &mut ActorGraph {
        &mut self.graph
    }

    /// Look up an actor
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.graph.get(id)
    }

    /// Look up an actor mutably
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.graph.get_mut(id)
    }

    /// Action pool shared by every actor of this scene
    pub fn pool(&self) -> &ActionPool {
        &self.pool
    }

    /// Action pool, mutably; use it to build pooled actions
    pub fn pool_mut(&mut self) -> &mut ActionPool {
        &mut self.pool
    }

    // Actor tree

    /// Store a detached actor
    pub fn insert(&mut self, actor: Actor) -> ActorId {
        self.graph.insert(actor)
    }

    /// New detached leaf actor
    pub fn create_actor(&mut self) -> ActorId {
        self.insert(Actor::new())
    }

    /// New detached group
    pub fn create_group(&mut self) -> ActorId {
        self.insert(Actor::group())
    }

    /// New detached actor drawing `geometry`
    pub fn create_model(&mut self, geometry: Arc<Geometry>) -> ActorId {
        self.insert(Actor::model(geometry))
    }

    /// Attach an actor to the root group
    ///
    /// # Errors
    /// See [`Scene::add_child`].
    pub fn add_actor(&mut self, actor: ActorId) -> SceneResult<()> {
        self.add_child(self.root, actor)
    }

    /// Store `actor` and attach it to `group` in one go
    ///
    /// # Errors
    /// See [`Scene::add_child`]; the actor stays in the arena detached.
    pub fn add_actor_to(&mut self, group: ActorId, actor: Actor) -> SceneResult<ActorId> {
        let id = self.insert(actor);
        self.add_child(group, id)?;
        Ok(id)
    }

    /// Append `child` to `group`, moving it out of its previous parent
    ///
    /// Moving clears any focus held inside the moved subtree.
    ///
    /// # Errors
    /// `UnknownActor` for stale ids, `NotAGroup` when `group` cannot hold
    /// children, `InvalidArgument` when `group` lies inside `child`.
    pub fn add_child(&mut self, group: ActorId, child: ActorId) -> SceneResult<()> {
        let previous = self.graph.attach(group, child)?;
        if previous.is_some() {
            self.unfocus(child);
        }
        Ok(())
    }

    /// Detach `child` from `group`; `false` if it was not a child of `group`
    pub fn remove_child(&mut self, group: ActorId, child: ActorId) -> bool {
        if !self.graph.detach(group, child) {
            return false;
        }
        self.unfocus(child);
        true
    }

    /// Detach an actor from its parent; `false` if it has none
    pub fn remove_actor(&mut self, actor: ActorId) -> bool {
        match self.graph.parent(actor) {
            Some(parent) => self.remove_child(parent, actor),
            None => false,
        }
    }

    /// Detach every child of `group` and return them in their former order
    pub fn clear_children(&mut self, group: ActorId) -> Vec<ActorId> {
        let children = self.graph.children(group).to_vec();
        for &child in &children {
            self.unfocus(child);
        }
        self.graph.clear_children(group)
    }

    /// Remove an actor from the scene and the arena
    ///
    /// Its actions and listeners are released. Its children are detached
    /// and stay in the arena. The root cannot be destroyed.
    pub fn destroy_actor(&mut self, actor: ActorId) -> bool {
        if actor == self.root {
            log::warn!("The root group cannot be destroyed");
            return false;
        }
        if !self.graph.contains(actor) {
            return false;
        }
        self.unfocus(actor);
        self.remove_actor(actor);
        self.graph.clear_children(actor);
        self.clear_actions(actor);
        if let Some(removed) = self.graph.remove(actor) {
            log::debug!("Destroyed {}", removed);
        }
        true
    }

    /// Empty the scene: clear focus, the root's children, actions and
    /// listeners
    pub fn clear(&mut self) {
        let changes = self.focus.unfocus_all();
        self.notify_focus(&changes);
        let root = self.root;
        self.graph.clear_children(root);
        self.clear_actions(root);
        if let Some(actor) = self.graph.get_mut(root) {
            actor.clear_listeners();
        }
        log::debug!("Scene cleared");
    }

    /// First actor below the root with the given name
    pub fn find_actor(&self, name: &str) -> Option<ActorId> {
        self.graph.find_actor(self.root, name)
    }

    /// Whether `actor` is `ancestor` or lies below it
    ///
    /// # Errors
    /// `InvalidArgument` when either id is stale.
    pub fn is_descendant_of(&self, actor: ActorId, ancestor: ActorId) -> SceneResult<bool> {
        self.graph.is_descendant_of(actor, ancestor)
    }

    /// Indented dump of the whole tree
    pub fn print_tree(&self) -> String {
        self.graph.print_tree(self.root)
    }

    /// Install or clear the callback fired when a group's children change
    pub fn set_children_changed_hook(&mut self, hook: Option<ChildrenChangedHook>) {
        self.graph.set_children_changed_hook(hook);
    }

    /// Compose every world matrix below the root
    pub fn update_world_transforms(&mut self) {
        self.graph.update_world_transforms(self.root);
    }

    // Actions

    /// Attach `action` to `actor`
    ///
    /// # Errors
    /// `UnknownActor` for a stale id; the action is released.
    pub fn add_action(&mut self, actor: ActorId, mut action: Action) -> SceneResult<ActionId> {
        let Some(target) = self.graph.get_mut(actor) else {
            self.pool.free(action);
            return Err(SceneError::UnknownActor(actor));
        };
        action.on_attach(&target.actions);
        let tag = action.tag();
        let id = self.actions.insert(ActionSlot {
            actor: Some(actor),
            action: Some(action),
        });
        target.actions.push(id);
        log::debug!("Attached {:?} action {:?} to {:?}", tag, id, actor);
        Ok(id)
    }

    /// Attach `action` to the root group
    ///
    /// # Errors
    /// Never fails in practice; the root always exists.
    pub fn add_scene_action(&mut self, action: Action) -> SceneResult<ActionId> {
        self.add_action(self.root, action)
    }

    /// Detach an action from `actor`; `false` if it was not attached there
    ///
    /// Safe to call from inside a running action, including for itself.
    pub fn remove_action(&mut self, actor: ActorId, action: ActionId) -> bool {
        let Some(target) = self.graph.get_mut(actor) else {
            return false;
        };
        let Some(index) = target.actions.iter().position(|&id| id == action) else {
            return false;
        };
        target.actions.remove(index);
        self.release_action(action);
        log::debug!("Removed action {:?} from {:?}", action, actor);
        true
    }

    /// Detach every action of `actor`
    pub fn clear_actions(&mut self, actor: ActorId) {
        let Some(target) = self.graph.get_mut(actor) else {
            return;
        };
        for id in std::mem::take(&mut target.actions) {
            self.release_action(id);
        }
    }

    /// Whether an action id is attached to some actor
    pub fn is_action_attached(&self, action: ActionId) -> bool {
        self.actions.get(action).is_some_and(|slot| slot.actor.is_some())
    }

    /// An attached action that is not currently running
    pub fn action(&self, action: ActionId) -> Option<&Action> {
        self.actions.get(action).and_then(|slot| slot.action.as_ref())
    }

    /// Mutable access to an attached action that is not currently running
    pub fn action_mut(&mut self, action: ActionId) -> Option<&mut Action> {
        self.actions.get_mut(action).and_then(|slot| slot.action.as_mut())
    }

    /// Return an action to the pool, or mark it for release once its
    /// running `act` returns
    fn release_action(&mut self, id: ActionId) {
        let running = match self.actions.get_mut(id) {
            Some(slot) if slot.action.is_none() => {
                slot.actor = None;
                true
            }
            Some(_) => false,
            None => return,
        };
        if !running {
            if let Some(action) = self.actions.remove(id).and_then(|slot| slot.action) {
                self.pool.free(action);
            }
        }
    }

    // Frame

    /// Advance actions by `delta` seconds, then the camera rig
    pub fn update(&mut self, delta: f32) {
        self.act(delta);
        self.update_world_transforms();
        self.rig.update(&mut self.camera, &self.graph, delta);
    }

    /// [`Scene::update`] with `delta` clamped to the configured maximum;
    /// returns the delta used
    pub fn update_clamped(&mut self, delta: f32) -> f32 {
        let delta = clamp_delta(delta, self.max_frame_delta);
        self.update(delta);
        delta
    }

    /// Advance every action in the tree by `delta` seconds
    ///
    /// A group runs its own actions before its children's; children are
    /// visited in the order they had when the group's pass started.
    pub fn act(&mut self, delta: f32) {
        log::trace!("Scene act {:.4}s", delta);
        self.act_subtree(self.root, delta);
    }

    fn act_subtree(&mut self, id: ActorId, delta: f32) {
        self.act_actor(id, delta);
        let snapshot = self.graph.children(id).to_vec();
        for child in snapshot {
            if self.graph.contains(child) {
                self.act_subtree(child, delta);
            }
        }
    }

    /// Run one actor's actions
    ///
    /// Each action is taken out of its slot while it runs, so it can freely
    /// add or remove actions on any actor, itself included. The cursor is
    /// re-derived from the action's position afterwards, or from the
    /// surviving actions that preceded it when it detached itself.
    fn act_actor(&mut self, actor: ActorId, delta: f32) {
        let mut cursor = 0;
        loop {
            let Some((id, preceding)) = self.graph.get(actor).and_then(|a| {
                let id = *a.actions.get(cursor)?;
                Some((id, a.actions[..cursor].to_vec()))
            }) else {
                break;
            };
            let Some(mut action) = self.actions.get_mut(id).and_then(|slot| slot.action.take()) else {
                cursor += 1;
                continue;
            };

            let done = {
                let mut ctx = ActionContext::new(self, actor, id);
                action.act(delta, &mut ctx)
            };

            let position = self
                .graph
                .get(actor)
                .and_then(|a| a.actions.iter().position(|&other| other == id));
            match position {
                Some(index) if done => {
                    if let Some(target) = self.graph.get_mut(actor) {
                        target.actions.remove(index);
                    }
                    self.actions.remove(id);
                    log::debug!("Action {:?} on {:?} complete", id, actor);
                    self.pool.free(action);
                    cursor = index;
                }
                Some(index) => {
                    if let Some(slot) = self.actions.get_mut(id) {
                        slot.action = Some(action);
                    }
                    cursor = index + 1;
                }
                None => {
                    // Detached while running
                    self.actions.remove(id);
                    self.pool.free(action);
                    cursor = self.graph.get(actor).map_or(0, |a| {
                        a.actions.iter().filter(|&other| preceding.contains(other)).count()
                    });
                }
            }
        }
    }

    /// Draw every visible model inside the view frustum
    pub fn draw(&mut self, renderer: &mut dyn Renderer) -> DrawStats {
        self.update_world_transforms();
        let frustum = self.camera.frustum();
        let mut stats = DrawStats::default();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(actor) = self.graph.get(id) else {
                continue;
            };
            if !actor.is_visible() {
                continue;
            }
            if let Some(geometry) = actor.geometry() {
                let in_view = actor
                    .bounding_sphere()
                    .map_or(true, |sphere| frustum.intersects_sphere(&sphere.center, sphere.radius));
                if in_view {
                    renderer.render(actor.transform().world_matrix(), geometry, &self.environment);
                    stats.visible += 1;
                } else {
                    stats.culled += 1;
                }
            }
            stack.extend(actor.children().iter().rev());
        }
        log::trace!("Drew {} models, culled {}", stats.visible, stats.culled);
        self.last_draw_stats = stats;
        stats
    }

    /// Counters from the most recent draw
    pub fn last_draw_stats(&self) -> DrawStats {
        self.last_draw_stats
    }

    // Camera, environment, viewport

    /// Active camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Active camera, mutably
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Replace the camera; its viewport is resized to the stage
    pub fn set_camera(&mut self, mut camera: Camera) {
        camera.set_viewport_size(self.viewport.width, self.viewport.height);
        self.camera = camera;
    }

    /// Lighting handed to the renderer
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Replace the lighting environment
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
    }

    /// Resolved stage and gutter sizes
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Change the stage size, keeping the device size
    pub fn set_viewport(&mut self, stage_width: f32, stage_height: f32, keep_aspect_ratio: bool) {
        self.viewport = Viewport::compute(
            stage_width,
            stage_height,
            keep_aspect_ratio,
            self.viewport.device_width,
            self.viewport.device_height,
        );
        self.apply_viewport();
    }

    /// Change the device size, keeping the stage size
    pub fn set_device_size(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::compute(
            self.viewport.stage_width,
            self.viewport.stage_height,
            self.viewport.keep_aspect_ratio,
            width,
            height,
        );
        self.apply_viewport();
    }

    fn apply_viewport(&mut self) {
        let viewport = self.viewport;
        log::debug!(
            "Viewport {}x{} (gutters {}, {}) on device {}x{}",
            viewport.width,
            viewport.height,
            viewport.gutter_width,
            viewport.gutter_height,
            viewport.device_width,
            viewport.device_height
        );
        self.camera.set_viewport_size(viewport.width, viewport.height);
    }

    /// Move the camera and its target by `amount`
    pub fn move_camera_by(&mut self, amount: Vec3, duration: f32, interpolation: Interpolation) {
        self.rig.move_by(amount, duration, interpolation);
    }

    /// Move the camera to `position`, keeping its target
    pub fn fly_camera_to(&mut self, position: Vec3, duration: f32, interpolation: Interpolation) {
        self.rig.fly_to(&self.camera, position, duration, interpolation);
    }

    /// Turn the camera's view by `degrees` about `axis`
    pub fn rotate_camera_by(&mut self, axis: Vec3, degrees: f32, duration: f32, interpolation: Interpolation) {
        self.rig.rotate_by(axis, degrees, duration, interpolation);
    }

    /// Keep the camera at `offset` from `actor`, optionally looking at it
    ///
    /// # Errors
    /// `UnknownActor` for a stale id.
    pub fn follow_actor(&mut self, actor: ActorId, offset: Vec3, look_at: bool) -> SceneResult<()> {
        if !self.graph.contains(actor) {
            return Err(SceneError::UnknownActor(actor));
        }
        self.rig.follow(actor, offset, look_at);
        Ok(())
    }

    /// Stop following an actor
    pub fn stop_following(&mut self) {
        self.rig.stop_following();
    }

    /// Camera animation state
    pub fn camera_rig(&self) -> &CameraRig {
        &self.rig
    }

    // Picking and input

    /// Intersection strategy
    pub fn pick_mode(&self) -> PickMode {
        self.picker.mode()
    }

    /// Change the intersection strategy
    pub fn set_pick_mode(&mut self, mode: PickMode) {
        self.picker.set_mode(mode);
    }

    /// Whether pointer input is resolved through the picker
    pub fn hit_testing(&self) -> bool {
        self.hit_testing
    }

    /// Enable or disable pointer hit testing
    pub fn set_hit_testing(&mut self, enabled: bool) {
        self.hit_testing = enabled;
    }

    /// Nearest actor under a stage point
    pub fn pick(&mut self, stage_x: f32, stage_y: f32) -> Option<PickHit> {
        let ray = self.camera.pick_ray(stage_x, stage_y)?;
        self.pick_ray(&ray)
    }

    /// Nearest actor hit by a world-space ray
    pub fn pick_ray(&mut self, ray: &Ray) -> Option<PickHit> {
        self.update_world_transforms();
        self.picker.pick(&self.graph, self.root, ray)
    }

    /// Pointer pressed at a device position; the hit actor becomes the
    /// selection
    pub fn touch_down(&mut self, device_x: f32, device_y: f32, pointer: u32, button: u32) -> Option<PickHit> {
        let (x, y) = self.viewport.to_stage(device_x, device_y);
        let hit = self.hit_test(x, y)?;
        self.set_focus(FocusKinds::SELECTION, Some(hit.actor));
        self.dispatch_pointer(&hit, EventKind::TouchDown { x, y, pointer, button });
        Some(hit)
    }

    /// Pointer released at a device position
    pub fn touch_up(&mut self, device_x: f32, device_y: f32, pointer: u32, button: u32) -> Option<PickHit> {
        let (x, y) = self.viewport.to_stage(device_x, device_y);
        let hit = self.hit_test(x, y)?;
        self.dispatch_pointer(&hit, EventKind::TouchUp { x, y, pointer, button });
        Some(hit)
    }

    /// Pointer dragged to a device position
    pub fn touch_dragged(&mut self, device_x: f32, device_y: f32, pointer: u32) -> Option<PickHit> {
        let (x, y) = self.viewport.to_stage(device_x, device_y);
        let hit = self.hit_test(x, y)?;
        self.dispatch_pointer(&hit, EventKind::TouchDragged { x, y, pointer });
        Some(hit)
    }

    fn hit_test(&mut self, stage_x: f32, stage_y: f32) -> Option<PickHit> {
        if !self.hit_testing {
            return None;
        }
        self.pick(stage_x, stage_y)
    }

    fn dispatch_pointer(&self, hit: &PickHit, kind: EventKind) {
        self.fire(SceneEvent::new(hit.actor, kind));
        self.fire(SceneEvent::new(
            hit.actor,
            EventKind::Hit {
                point: hit.point,
                distance: hit.distance,
            },
        ));
    }

    /// Deliver an event to its target's listeners, then up the ancestors
    ///
    /// Returns `true` once a listener consumes it. A listener that is
    /// already handling an event is skipped.
    pub fn fire(&self, mut event: SceneEvent) -> bool {
        let mut current = Some(event.target);
        while let Some(id) = current {
            let Some(actor) = self.graph.get(id) else {
                break;
            };
            event.current = id;
            current = actor.parent();
            for listener in actor.listeners().to_vec() {
                let Ok(mut listener) = listener.try_borrow_mut() else {
                    log::warn!("Listener on {:?} is busy, skipping {:?}", id, event.kind);
                    continue;
                };
                if listener.handle(&event) {
                    return true;
                }
            }
        }
        false
    }

    // Focus

    /// Actor receiving key events
    pub fn keyboard_focus(&self) -> Option<ActorId> {
        self.focus.get(FocusKinds::KEYBOARD)
    }

    /// Actor receiving scroll events
    pub fn scroll_focus(&self) -> Option<ActorId> {
        self.focus.get(FocusKinds::SCROLL)
    }

    /// Currently selected actor
    pub fn selection(&self) -> Option<ActorId> {
        self.focus.get(FocusKinds::SELECTION)
    }

    /// Give keyboard focus to `actor`, or clear it
    ///
    /// # Errors
    /// `UnknownActor` for a stale id.
    pub fn set_keyboard_focus(&mut self, actor: Option<ActorId>) -> SceneResult<bool> {
        self.set_focus_checked(FocusKinds::KEYBOARD, actor)
    }

    /// Give scroll focus to `actor`, or clear it
    ///
    /// # Errors
    /// `UnknownActor` for a stale id.
    pub fn set_scroll_focus(&mut self, actor: Option<ActorId>) -> SceneResult<bool> {
        self.set_focus_checked(FocusKinds::SCROLL, actor)
    }

    /// Select `actor`, or clear the selection
    ///
    /// # Errors
    /// `UnknownActor` for a stale id.
    pub fn set_selection(&mut self, actor: Option<ActorId>) -> SceneResult<bool> {
        self.set_focus_checked(FocusKinds::SELECTION, actor)
    }

    /// Clear any focus held by `actor` or one of its descendants; returns
    /// the kinds that were cleared
    pub fn unfocus(&mut self, actor: ActorId) -> FocusKinds {
        let changes = self.focus.unfocus(&self.graph, actor);
        self.notify_focus(&changes);
        Focus::kinds_of(&changes)
    }

    /// Clear every focus
    pub fn unfocus_all(&mut self) -> FocusKinds {
        let changes = self.focus.unfocus_all();
        self.notify_focus(&changes);
        Focus::kinds_of(&changes)
    }

    fn set_focus_checked(&mut self, kind: FocusKinds, actor: Option<ActorId>) -> SceneResult<bool> {
        if let Some(id) = actor {
            if !self.graph.contains(id) {
                return Err(SceneError::UnknownActor(id));
            }
        }
        Ok(self.set_focus(kind, actor))
    }

    fn set_focus(&mut self, kind: FocusKinds, actor: Option<ActorId>) -> bool {
        let Some(change) = self.focus.set(kind, actor) else {
            return false;
        };
        self.notify_focus(&[change]);
        true
    }

    fn notify_focus(&self, changes: &[FocusChange]) {
        for change in changes {
            log::debug!("{:?} focus: {:?} -> {:?}", change.kind, change.lost, change.gained);
            if let Some(lost) = change.lost {
                self.fire(SceneEvent::new(
                    lost,
                    EventKind::FocusChanged {
                        kind: change.kind,
                        focused: false,
                    },
                ));
            }
            if let Some(gained) = change.gained {
                self.fire(SceneEvent::new(
                    gained,
                    EventKind::FocusChanged {
                        kind: change.kind,
                        focused: true,
                    },
                ));
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
