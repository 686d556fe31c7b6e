//! # Actions
//!
//! Time-driven state machines that mutate an actor over one or more frames.
//!
//! Every action moves through `Pending -> Active -> Complete`. The first
//! `act` call runs the kind's begin hook (tweens capture their start value
//! here), every call advances it, and `act` returns `true` exactly when the
//! action has completed this activation. Composite kinds own their children
//! and forward the same contract.
//!
//! Top-level actions are attached to an actor through
//! [`Scene::add_action`](crate::scene::Scene::add_action) and referred to by
//! [`ActionId`]. Completed or detached actions go back to the scene's
//! [`ActionPool`] if they were obtained from it.

pub mod composite;
pub mod context;
pub mod delegate;
pub mod instant;
pub mod interpolation;
pub mod pool;
pub mod temporal;

pub use composite::{Parallel, Repeat, RepeatCount, Sequence};
pub use context::ActionContext;
pub use delegate::{After, Delay, TimeScale};
pub use instant::{AddAction, RemoveAction, RemoveActor, RunAction, RunCallback};
pub use interpolation::Interpolation;
pub use pool::{ActionPool, ActionTag};
pub use temporal::{Timing, TweenBy, TweenTo, Tweenable};

use slotmap::new_key_type;

use crate::foundation::math::Vec3;
use crate::scene::ActorId;

new_key_type! {
    /// Handle to an action attached to an actor
    pub struct ActionId;
}

/// Lifecycle state of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    /// Not yet begun
    #[default]
    Pending,
    /// Begun, not yet complete
    Active,
    /// Completed this activation
    Complete,
}

/// What an action does
#[derive(Debug)]
pub enum ActionKind {
    /// Tween the position to a value
    MoveTo(TweenTo<Vec3>),
    /// Tween the position by an offset
    MoveBy(TweenBy<Vec3>),
    /// Tween the scale to a value
    ScaleTo(TweenTo<Vec3>),
    /// Tween the scale by an amount
    ScaleBy(TweenBy<Vec3>),
    /// Tween the scalar rotation to an angle in degrees
    RotateTo(TweenTo<f32>),
    /// Tween the scalar rotation by degrees
    RotateBy(TweenBy<f32>),
    /// Show or hide the actor
    Visible(bool),
    /// Wait, then optionally run a wrapped action
    Delay(Delay),
    /// Invoke a callback once
    Run(RunAction),
    /// Attach an action to an actor
    AddAction(AddAction),
    /// Detach an action from an actor
    RemoveAction(RemoveAction),
    /// Remove an actor from its parent
    RemoveActor(RemoveActor),
    /// Run children one after another
    Sequence(Sequence),
    /// Run children side by side
    Parallel(Parallel),
    /// Run a child several times or forever
    Repeat(Repeat),
    /// Run a child once the actions attached before it are gone
    After(After),
    /// Run a child with scaled time
    TimeScale(TimeScale),
}

impl ActionKind {
    /// Pool key for this kind
    pub fn tag(&self) -> ActionTag {
        match self {
            Self::MoveTo(_) => ActionTag::MoveTo,
            Self::MoveBy(_) => ActionTag::MoveBy,
            Self::ScaleTo(_) => ActionTag::ScaleTo,
            Self::ScaleBy(_) => ActionTag::ScaleBy,
            Self::RotateTo(_) => ActionTag::RotateTo,
            Self::RotateBy(_) => ActionTag::RotateBy,
            Self::Visible(_) => ActionTag::Visible,
            Self::Delay(_) => ActionTag::Delay,
            Self::Run(_) => ActionTag::Run,
            Self::AddAction(_) => ActionTag::AddAction,
            Self::RemoveAction(_) => ActionTag::RemoveAction,
            Self::RemoveActor(_) => ActionTag::RemoveActor,
            Self::Sequence(_) => ActionTag::Sequence,
            Self::Parallel(_) => ActionTag::Parallel,
            Self::Repeat(_) => ActionTag::Repeat,
            Self::After(_) => ActionTag::After,
            Self::TimeScale(_) => ActionTag::TimeScale,
        }
    }

    /// Freshly reset kind for a tag
    pub fn default_for(tag: ActionTag) -> Self {
        match tag {
            ActionTag::MoveTo => Self::MoveTo(TweenTo::default()),
            ActionTag::MoveBy => Self::MoveBy(TweenBy::default()),
            ActionTag::ScaleTo => Self::ScaleTo(TweenTo::default()),
            ActionTag::ScaleBy => Self::ScaleBy(TweenBy::default()),
            ActionTag::RotateTo => Self::RotateTo(TweenTo::default()),
            ActionTag::RotateBy => Self::RotateBy(TweenBy::default()),
            ActionTag::Visible => Self::Visible(true),
            ActionTag::Delay => Self::Delay(Delay::default()),
            ActionTag::Run => Self::Run(RunAction::default()),
            ActionTag::AddAction => Self::AddAction(AddAction::default()),
            ActionTag::RemoveAction => Self::RemoveAction(RemoveAction::default()),
            ActionTag::RemoveActor => Self::RemoveActor(RemoveActor::default()),
            ActionTag::Sequence => Self::Sequence(Sequence::default()),
            ActionTag::Parallel => Self::Parallel(Parallel::default()),
            ActionTag::Repeat => Self::Repeat(Repeat::default()),
            ActionTag::After => Self::After(After::default()),
            ActionTag::TimeScale => Self::TimeScale(TimeScale::default()),
        }
    }

    /// Timing of tween kinds
    pub fn timing(&self) -> Option<&Timing> {
        match self {
            Self::MoveTo(t) | Self::ScaleTo(t) => Some(&t.timing),
            Self::MoveBy(t) | Self::ScaleBy(t) => Some(&t.timing),
            Self::RotateTo(t) => Some(&t.timing),
            Self::RotateBy(t) => Some(&t.timing),
            _ => None,
        }
    }

    fn timing_mut(&mut self) -> Option<&mut Timing> {
        match self {
            Self::MoveTo(t) | Self::ScaleTo(t) => Some(&mut t.timing),
            Self::MoveBy(t) | Self::ScaleBy(t) => Some(&mut t.timing),
            Self::RotateTo(t) => Some(&mut t.timing),
            Self::RotateBy(t) => Some(&mut t.timing),
            _ => None,
        }
    }

    fn begin(&mut self, ctx: &ActionContext<'_>) {
        let Some(node) = ctx.transform() else {
            return;
        };
        match self {
            Self::MoveTo(t) => t.begin(node.position()),
            Self::MoveBy(t) => t.begin(node.position()),
            Self::ScaleTo(t) => t.begin(node.scale()),
            Self::ScaleBy(t) => t.begin(node.scale()),
            Self::RotateTo(t) => t.begin(node.rotation()),
            Self::RotateBy(t) => t.begin(node.rotation()),
            _ => {}
        }
    }

    fn step(&mut self, delta: f32, ctx: &mut ActionContext<'_>) -> bool {
        match self {
            Self::MoveTo(t) => ctx
                .with_transform(|node| {
                    let (value, done) = t.step(delta);
                    node.set_position(value);
                    done
                })
                .unwrap_or(true),
            Self::MoveBy(t) => ctx
                .with_transform(|node| {
                    let (value, done) = t.step(delta, node.position());
                    node.set_position(value);
                    done
                })
                .unwrap_or(true),
            Self::ScaleTo(t) => ctx
                .with_transform(|node| {
                    let (value, done) = t.step(delta);
                    node.set_scale(value);
                    done
                })
                .unwrap_or(true),
            Self::ScaleBy(t) => ctx
                .with_transform(|node| {
                    let (value, done) = t.step(delta, node.scale());
                    node.set_scale(value);
                    done
                })
                .unwrap_or(true),
            Self::RotateTo(t) => ctx
                .with_transform(|node| {
                    let (value, done) = t.step(delta);
                    node.set_yaw(value);
                    done
                })
                .unwrap_or(true),
            Self::RotateBy(t) => ctx
                .with_transform(|node| {
                    let (value, done) = t.step(delta, node.rotation());
                    node.set_yaw(value);
                    done
                })
                .unwrap_or(true),
            Self::Visible(visible) => {
                if let Some(actor) = ctx.actor_mut() {
                    actor.set_visible(*visible);
                }
                true
            }
            Self::Delay(d) => d.step(delta, ctx),
            Self::Run(r) => r.step(ctx),
            Self::AddAction(a) => a.step(ctx),
            Self::RemoveAction(r) => r.step(ctx),
            Self::RemoveActor(r) => r.step(ctx),
            Self::Sequence(s) => s.step(delta, ctx),
            Self::Parallel(p) => p.step(delta, ctx),
            Self::Repeat(r) => r.step(delta, ctx),
            Self::After(a) => a.step(delta, ctx),
            Self::TimeScale(t) => t.step(delta, ctx),
        }
    }

    fn restart(&mut self) {
        if let Some(timing) = self.timing_mut() {
            timing.restart();
        }
        match self {
            Self::Delay(d) => d.restart(),
            Self::RemoveActor(r) => r.restart(),
            Self::Sequence(s) => s.restart(),
            Self::Parallel(p) => p.restart(),
            Self::Repeat(r) => r.restart(),
            Self::After(a) => a.restart(),
            Self::TimeScale(t) => t.restart(),
            _ => {}
        }
    }

    fn on_attach(&mut self, existing: &[ActionId]) {
        match self {
            Self::After(a) => a.on_attach(existing),
            _ => self.children_mut().for_each(|child| child.on_attach(existing)),
        }
    }

    fn children_mut(&mut self) -> Box<dyn Iterator<Item = &mut Action> + '_> {
        match self {
            Self::Sequence(s) => Box::new(s.actions.iter_mut()),
            Self::Parallel(p) => Box::new(p.actions.iter_mut()),
            Self::Delay(d) => Box::new(d.action.as_deref_mut().into_iter()),
            Self::Repeat(r) => Box::new(r.action.as_deref_mut().into_iter()),
            Self::After(a) => Box::new(a.action.as_deref_mut().into_iter()),
            Self::TimeScale(t) => Box::new(t.action.as_deref_mut().into_iter()),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Move owned children out, leaving empty containers behind
    fn drain_children(&mut self) -> Vec<Action> {
        match self {
            Self::Sequence(s) => s.actions.drain(..).collect(),
            Self::Parallel(p) => p.actions.drain(..).collect(),
            Self::Delay(d) => d.action.take().map(|a| *a).into_iter().collect(),
            Self::Repeat(r) => r.action.take().map(|a| *a).into_iter().collect(),
            Self::After(a) => a.action.take().map(|a| *a).into_iter().collect(),
            Self::TimeScale(t) => t.action.take().map(|a| *a).into_iter().collect(),
            Self::AddAction(a) => a.action.take().map(|a| *a).into_iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Reset every field to its default, keeping container capacity
    fn reset(&mut self) {
        match self {
            Self::Sequence(s) => s.reset(),
            Self::Parallel(p) => p.reset(),
            other => *other = Self::default_for(other.tag()),
        }
    }
}

/// A time-driven behavior
#[derive(Debug)]
pub struct Action {
    state: ActionState,
    pooled: bool,
    kind: ActionKind,
}

impl Action {
    /// Wrap a kind into a pending, unpooled action
    pub fn new(kind: ActionKind) -> Self {
        Self {
            state: ActionState::Pending,
            pooled: false,
            kind,
        }
    }

    /// What the action does
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Mutable access to what the action does
    pub fn kind_mut(&mut self) -> &mut ActionKind {
        &mut self.kind
    }

    /// Pool key
    pub fn tag(&self) -> ActionTag {
        self.kind.tag()
    }

    /// Lifecycle state
    pub fn state(&self) -> ActionState {
        self.state
    }

    /// Whether the current activation has completed
    pub fn is_complete(&self) -> bool {
        self.state == ActionState::Complete
    }

    /// Whether the action goes back to a pool when released
    pub fn is_pooled(&self) -> bool {
        self.pooled
    }

    /// Builder pattern: set the easing of a tween; ignored by other kinds
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        if let Some(timing) = self.kind.timing_mut() {
            timing.set_interpolation(interpolation);
        }
        self
    }

    /// Return to pending so the next `act` begins a new activation
    pub fn restart(&mut self) {
        self.state = ActionState::Pending;
        self.kind.restart();
    }

    /// Advance by `delta` seconds; `true` once complete
    pub fn act(&mut self, delta: f32, ctx: &mut ActionContext<'_>) -> bool {
        match self.state {
            ActionState::Complete => return true,
            ActionState::Pending => {
                self.kind.begin(ctx);
                self.state = ActionState::Active;
            }
            ActionState::Active => {}
        }
        let done = self.kind.step(delta, ctx);
        if done {
            self.state = ActionState::Complete;
        }
        done
    }

    /// Called when the action tree is attached to an actor that already
    /// runs `existing`
    pub(crate) fn on_attach(&mut self, existing: &[ActionId]) {
        self.kind.on_attach(existing);
    }

    pub(crate) fn mark_pooled(&mut self) {
        self.pooled = true;
    }

    pub(crate) fn drain_children(&mut self) -> Vec<Action> {
        self.kind.drain_children()
    }

    pub(crate) fn reset(&mut self) {
        self.state = ActionState::Pending;
        self.kind.reset();
    }

    /// Move to `position` over `duration` seconds
    pub fn move_to(position: Vec3, duration: f32) -> Self {
        Self::new(ActionKind::MoveTo(TweenTo::new(position, duration, Interpolation::Linear)))
    }

    /// Move by `offset` over `duration` seconds
    pub fn move_by(offset: Vec3, duration: f32) -> Self {
        Self::new(ActionKind::MoveBy(TweenBy::new(offset, duration, Interpolation::Linear)))
    }

    /// Scale to `scale` over `duration` seconds
    pub fn scale_to(scale: Vec3, duration: f32) -> Self {
        Self::new(ActionKind::ScaleTo(TweenTo::new(scale, duration, Interpolation::Linear)))
    }

    /// Add `amount` to the scale over `duration` seconds
    pub fn scale_by(amount: Vec3, duration: f32) -> Self {
        Self::new(ActionKind::ScaleBy(TweenBy::new(amount, duration, Interpolation::Linear)))
    }

    /// Rotate to `degrees` over `duration` seconds
    pub fn rotate_to(degrees: f32, duration: f32) -> Self {
        Self::new(ActionKind::RotateTo(TweenTo::new(degrees, duration, Interpolation::Linear)))
    }

    /// Rotate by `degrees` over `duration` seconds
    pub fn rotate_by(degrees: f32, duration: f32) -> Self {
        Self::new(ActionKind::RotateBy(TweenBy::new(degrees, duration, Interpolation::Linear)))
    }

    /// Make the actor visible
    pub fn show() -> Self {
        Self::visible(true)
    }

    /// Make the actor invisible
    pub fn hide() -> Self {
        Self::visible(false)
    }

    /// Set the actor's visibility
    pub fn visible(visible: bool) -> Self {
        Self::new(ActionKind::Visible(visible))
    }

    /// Wait `duration` seconds
    pub fn delay(duration: f32) -> Self {
        Self::new(ActionKind::Delay(Delay::new(duration, None)))
    }

    /// Wait `duration` seconds, then run `action`
    pub fn delay_then(duration: f32, action: Action) -> Self {
        Self::new(ActionKind::Delay(Delay::new(duration, Some(action))))
    }

    /// Invoke `callback` once
    pub fn run(callback: impl FnMut(&mut ActionContext<'_>) + 'static) -> Self {
        Self::new(ActionKind::Run(RunAction::new(Box::new(callback))))
    }

    /// Attach `action` to the running actor
    pub fn add_action(action: Action) -> Self {
        Self::new(ActionKind::AddAction(AddAction::new(None, action)))
    }

    /// Attach `action` to `target`
    pub fn add_action_to(target: ActorId, action: Action) -> Self {
        Self::new(ActionKind::AddAction(AddAction::new(Some(target), action)))
    }

    /// Detach `action` from the running actor
    pub fn remove_action(action: ActionId) -> Self {
        Self::new(ActionKind::RemoveAction(RemoveAction::new(None, action)))
    }

    /// Detach `action` from `target`
    pub fn remove_action_from(target: ActorId, action: ActionId) -> Self {
        Self::new(ActionKind::RemoveAction(RemoveAction::new(Some(target), action)))
    }

    /// Remove the running actor from its parent
    pub fn remove_actor() -> Self {
        Self::new(ActionKind::RemoveActor(RemoveActor::new(None)))
    }

    /// Remove `target` from its parent
    pub fn remove_actor_target(target: ActorId) -> Self {
        Self::new(ActionKind::RemoveActor(RemoveActor::new(Some(target))))
    }

    /// Run `actions` one after another
    pub fn sequence(actions: impl IntoIterator<Item = Action>) -> Self {
        Self::new(ActionKind::Sequence(Sequence::new(actions)))
    }

    /// Run `actions` side by side
    pub fn parallel(actions: impl IntoIterator<Item = Action>) -> Self {
        Self::new(ActionKind::Parallel(Parallel::new(actions)))
    }

    /// Run `action` `count` times
    pub fn repeat(count: u32, action: Action) -> Self {
        Self::new(ActionKind::Repeat(Repeat::new(RepeatCount::Times(count), action)))
    }

    /// Run `action` forever
    pub fn forever(action: Action) -> Self {
        Self::new(ActionKind::Repeat(Repeat::new(RepeatCount::Forever, action)))
    }

    /// Run `action` once every action attached before this one is gone
    pub fn after(action: Action) -> Self {
        Self::new(ActionKind::After(After::new(action)))
    }

    /// Run `action` with deltas multiplied by `scale`
    pub fn time_scale(scale: f32, action: Action) -> Self {
        Self::new(ActionKind::TimeScale(TimeScale::new(scale, action)))
    }
}

/// Arena slot for an attached top-level action
///
/// `action` is `None` while the action runs; `actor` is cleared when the
/// action is detached, and a detached running action is released once its
/// `act` returns.
#[derive(Debug)]
pub(crate) struct ActionSlot {
    pub(crate) actor: Option<ActorId>,
    pub(crate) action: Option<Action>,
}
