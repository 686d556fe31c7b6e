//! Actions that own and drive other actions

use crate::action::{Action, ActionContext};

/// Runs children one at a time in order
///
/// Leftover time from a child that completes mid-step is not carried into
/// the next child; the next child starts on the following step.
#[derive(Debug, Default)]
pub struct Sequence {
    pub(crate) actions: Vec<Action>,
    index: usize,
}

impl Sequence {
    /// Sequence over `actions`
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            index: 0,
        }
    }

    /// Children in run order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Append a child
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Index of the child currently running
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn step(&mut self, delta: f32, ctx: &mut ActionContext<'_>) -> bool {
        let Some(current) = self.actions.get_mut(self.index) else {
            return true;
        };
        if current.act(delta, ctx) {
            if ctx.is_detached() {
                return true;
            }
            self.index += 1;
            return self.index >= self.actions.len();
        }
        false
    }

    pub(crate) fn restart(&mut self) {
        self.index = 0;
        self.actions.iter_mut().for_each(Action::restart);
    }

    pub(crate) fn reset(&mut self) {
        self.actions.clear();
        self.index = 0;
    }
}

/// Runs all children every step with the full delta
///
/// Completes once every child has reported completion; finished children
/// keep being called and answer `true` immediately.
#[derive(Debug, Default)]
pub struct Parallel {
    pub(crate) actions: Vec<Action>,
    complete: bool,
}

impl Parallel {
    /// Parallel over `actions`
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            complete: false,
        }
    }

    /// Children
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Add a child
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn step(&mut self, delta: f32, ctx: &mut ActionContext<'_>) -> bool {
        if self.complete {
            return true;
        }
        self.complete = true;
        for action in &mut self.actions {
            if !action.act(delta, ctx) {
                self.complete = false;
            }
            if ctx.is_detached() {
                return true;
            }
        }
        self.complete
    }

    pub(crate) fn restart(&mut self) {
        self.complete = false;
        self.actions.iter_mut().for_each(Action::restart);
    }

    pub(crate) fn reset(&mut self) {
        self.actions.clear();
        self.complete = false;
    }
}

/// How many times a [`Repeat`] runs its child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    /// A fixed number of activations
    Times(u32),
    /// Never completes
    Forever,
}

impl Default for RepeatCount {
    fn default() -> Self {
        Self::Times(0)
    }
}

/// Restarts its child after each completion
#[derive(Debug, Default)]
pub struct Repeat {
    /// Activation count
    pub count: RepeatCount,
    executed: u32,
    finished: bool,
    pub(crate) action: Option<Box<Action>>,
}

impl Repeat {
    /// Repeat `action` `count` times
    pub fn new(count: RepeatCount, action: Action) -> Self {
        Self {
            count,
            executed: 0,
            finished: false,
            action: Some(Box::new(action)),
        }
    }

    /// Completed activations of the child
    pub fn executed(&self) -> u32 {
        self.executed
    }

    /// Stop after the child's current activation completes
    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub(crate) fn step(&mut self, delta: f32, ctx: &mut ActionContext<'_>) -> bool {
        if self.count == RepeatCount::Times(self.executed) {
            return true;
        }
        let Some(action) = self.action.as_mut() else {
            return true;
        };
        if action.act(delta, ctx) {
            if self.finished || ctx.is_detached() {
                return true;
            }
            if let RepeatCount::Times(count) = self.count {
                self.executed += 1;
                if self.executed >= count {
                    return true;
                }
            }
            action.restart();
        }
        false
    }

    pub(crate) fn restart(&mut self) {
        self.executed = 0;
        self.finished = false;
        if let Some(action) = self.action.as_mut() {
            action.restart();
        }
    }
}
