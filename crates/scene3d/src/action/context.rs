//! Execution context handed to running actions

use crate::action::ActionId;
use crate::scene::{Actor, ActorId, Scene, TransformNode};

/// Access to the scene from inside a running action
///
/// While an action runs it is taken out of the scene, so the whole scene is
/// available mutably: actions may attach or detach other actions, move
/// actors between groups, or detach themselves.
pub struct ActionContext<'a> {
    scene: &'a mut Scene,
    actor: ActorId,
    running: ActionId,
}

impl<'a> ActionContext<'a> {
    pub(crate) fn new(scene: &'a mut Scene, actor: ActorId, running: ActionId) -> Self {
        Self { scene, actor, running }
    }

    /// Actor the running action is attached to
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Id of the top-level action being run
    pub fn running(&self) -> ActionId {
        self.running
    }

    /// The scene
    pub fn scene(&self) -> &Scene {
        self.scene
    }

    /// The scene, mutably
    pub fn scene_mut(&mut self) -> &mut Scene {
        self.scene
    }

    /// The actor the action runs on
    pub fn actor_ref(&self) -> Option<&Actor> {
        self.scene.graph().get(self.actor)
    }

    /// The actor the action runs on, mutably
    pub fn actor_mut(&mut self) -> Option<&mut Actor> {
        self.scene.graph_mut().get_mut(self.actor)
    }

    /// Transform of the actor the action runs on
    pub fn transform(&self) -> Option<&TransformNode> {
        self.actor_ref().map(Actor::transform)
    }

    /// Run `f` on the actor's transform; `None` if the actor is gone
    pub fn with_transform<R>(&mut self, f: impl FnOnce(&mut TransformNode) -> R) -> Option<R> {
        self.actor_mut().map(|actor| f(actor.transform_mut()))
    }

    /// Whether the running top-level action was detached from its actor
    /// during this step
    pub fn is_detached(&self) -> bool {
        !self.scene.is_action_attached(self.running)
    }

    /// Top-level actions currently attached to the actor
    pub fn attached_actions(&self) -> &[ActionId] {
        self.actor_ref().map(Actor::actions).unwrap_or(&[])
    }
}
