//! Actions that wrap a single inner action

use crate::action::{Action, ActionContext, ActionId};

/// Waits for a duration, then runs an optional inner action
///
/// Time left over from the step that ends the wait is passed on to the
/// inner action.
#[derive(Debug, Default)]
pub struct Delay {
    /// Wait in seconds
    pub duration: f32,
    time: f32,
    pub(crate) action: Option<Box<Action>>,
}

impl Delay {
    /// Wait `duration` seconds, then run `action` if given
    pub fn new(duration: f32, action: Option<Action>) -> Self {
        Self {
            duration,
            time: 0.0,
            action: action.map(Box::new),
        }
    }

    /// Time waited so far
    pub fn time(&self) -> f32 {
        self.time
    }

    pub(crate) fn step(&mut self, delta: f32, ctx: &mut ActionContext<'_>) -> bool {
        let mut delta = delta;
        if self.time < self.duration {
            self.time += delta;
            if self.time < self.duration {
                return false;
            }
            delta = self.time - self.duration;
        }
        match self.action.as_mut() {
            Some(action) => action.act(delta, ctx),
            None => true,
        }
    }

    pub(crate) fn restart(&mut self) {
        self.time = 0.0;
        if let Some(action) = self.action.as_mut() {
            action.restart();
        }
    }
}

/// Runs its inner action once every action attached to the actor before it
/// has completed or been removed
#[derive(Debug, Default)]
pub struct After {
    waiting: Vec<ActionId>,
    pub(crate) action: Option<Box<Action>>,
}

impl After {
    /// Run `action` after the actions already attached
    pub fn new(action: Action) -> Self {
        Self {
            waiting: Vec::new(),
            action: Some(Box::new(action)),
        }
    }

    /// Actions still being waited for
    pub fn waiting(&self) -> &[ActionId] {
        &self.waiting
    }

    pub(crate) fn on_attach(&mut self, existing: &[ActionId]) {
        self.waiting.extend_from_slice(existing);
        if let Some(action) = self.action.as_mut() {
            action.on_attach(existing);
        }
    }

    pub(crate) fn step(&mut self, delta: f32, ctx: &mut ActionContext<'_>) -> bool {
        let current = ctx.attached_actions();
        // Only the action running this one is left
        if current.len() == 1 {
            self.waiting.clear();
        }
        self.waiting.retain(|id| current.contains(id));
        if !self.waiting.is_empty() {
            return false;
        }
        match self.action.as_mut() {
            Some(action) => action.act(delta, ctx),
            None => true,
        }
    }

    pub(crate) fn restart(&mut self) {
        self.waiting.clear();
        if let Some(action) = self.action.as_mut() {
            action.restart();
        }
    }
}

/// Runs its inner action with every delta multiplied by `scale`
#[derive(Debug, Default)]
pub struct TimeScale {
    /// Delta multiplier
    pub scale: f32,
    pub(crate) action: Option<Box<Action>>,
}

impl TimeScale {
    /// Run `action` at `scale` times normal speed
    pub fn new(scale: f32, action: Action) -> Self {
        Self {
            scale,
            action: Some(Box::new(action)),
        }
    }

    pub(crate) fn step(&mut self, delta: f32, ctx: &mut ActionContext<'_>) -> bool {
        match self.action.as_mut() {
            Some(action) => action.act(delta * self.scale, ctx),
            None => true,
        }
    }

    pub(crate) fn restart(&mut self) {
        if let Some(action) = self.action.as_mut() {
            action.restart();
        }
    }
}
