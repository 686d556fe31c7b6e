//! Actions that complete on their first step

use std::fmt;

use crate::action::{Action, ActionContext, ActionId};
use crate::scene::ActorId;

/// Callback invoked by a [`RunAction`]
pub type RunCallback = Box<dyn FnMut(&mut ActionContext<'_>)>;

/// Invokes a callback once
#[derive(Default)]
pub struct RunAction {
    callback: Option<RunCallback>,
}

impl RunAction {
    /// Wrap a callback
    pub fn new(callback: RunCallback) -> Self {
        Self { callback: Some(callback) }
    }

    pub(crate) fn step(&mut self, ctx: &mut ActionContext<'_>) -> bool {
        if let Some(callback) = self.callback.as_mut() {
            callback(ctx);
        }
        true
    }
}

impl fmt::Debug for RunAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunAction")
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Attaches an action to an actor
#[derive(Debug, Default)]
pub struct AddAction {
    /// Receiving actor; the running actor when `None`
    pub target: Option<ActorId>,
    pub(crate) action: Option<Box<Action>>,
}

impl AddAction {
    /// Attach `action` to `target` (or the running actor)
    pub fn new(target: Option<ActorId>, action: Action) -> Self {
        Self {
            target,
            action: Some(Box::new(action)),
        }
    }

    /// The action still waiting to be attached
    pub fn action(&self) -> Option<&Action> {
        self.action.as_deref()
    }

    pub(crate) fn step(&mut self, ctx: &mut ActionContext<'_>) -> bool {
        let target = self.target.unwrap_or_else(|| ctx.actor());
        if let Some(action) = self.action.take() {
            if let Err(err) = ctx.scene_mut().add_action(target, *action) {
                log::warn!("Add action to {:?} failed: {}", target, err);
            }
        }
        true
    }
}

/// Detaches an action from an actor
#[derive(Debug, Default)]
pub struct RemoveAction {
    /// Actor to detach from; the running actor when `None`
    pub target: Option<ActorId>,
    /// Action to detach
    pub action: Option<ActionId>,
}

impl RemoveAction {
    /// Detach `action` from `target` (or the running actor)
    pub fn new(target: Option<ActorId>, action: ActionId) -> Self {
        Self {
            target,
            action: Some(action),
        }
    }

    pub(crate) fn step(&mut self, ctx: &mut ActionContext<'_>) -> bool {
        let target = self.target.unwrap_or_else(|| ctx.actor());
        if let Some(action) = self.action {
            ctx.scene_mut().remove_action(target, action);
        }
        true
    }
}

/// Removes an actor from its parent, once per activation
#[derive(Debug, Default)]
pub struct RemoveActor {
    /// Actor to remove; the running actor when `None`
    pub target: Option<ActorId>,
    removed: bool,
}

impl RemoveActor {
    /// Remove `target` (or the running actor)
    pub fn new(target: Option<ActorId>) -> Self {
        Self { target, removed: false }
    }

    pub(crate) fn step(&mut self, ctx: &mut ActionContext<'_>) -> bool {
        if !self.removed {
            self.removed = true;
            let target = self.target.unwrap_or_else(|| ctx.actor());
            ctx.scene_mut().remove_actor(target);
        }
        true
    }

    pub(crate) fn restart(&mut self) {
        self.removed = false;
    }
}
