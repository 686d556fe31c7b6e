//! Free lists of reusable actions, keyed by kind

use std::collections::HashMap;

use crate::action::{
    Action, ActionId, ActionKind, AddAction, After, Delay, Interpolation, RemoveAction, RemoveActor,
    Repeat, RepeatCount, RunAction, TimeScale, TweenBy, TweenTo,
};
use crate::foundation::math::Vec3;
use crate::scene::ActorId;

/// Pool key identifying an action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTag {
    /// [`ActionKind::MoveTo`]
    MoveTo,
    /// [`ActionKind::MoveBy`]
    MoveBy,
    /// [`ActionKind::ScaleTo`]
    ScaleTo,
    /// [`ActionKind::ScaleBy`]
    ScaleBy,
    /// [`ActionKind::RotateTo`]
    RotateTo,
    /// [`ActionKind::RotateBy`]
    RotateBy,
    /// [`ActionKind::Visible`]
    Visible,
    /// [`ActionKind::Delay`]
    Delay,
    /// [`ActionKind::Run`]
    Run,
    /// [`ActionKind::AddAction`]
    AddAction,
    /// [`ActionKind::RemoveAction`]
    RemoveAction,
    /// [`ActionKind::RemoveActor`]
    RemoveActor,
    /// [`ActionKind::Sequence`]
    Sequence,
    /// [`ActionKind::Parallel`]
    Parallel,
    /// [`ActionKind::Repeat`]
    Repeat,
    /// [`ActionKind::After`]
    After,
    /// [`ActionKind::TimeScale`]
    TimeScale,
}

/// Per-kind free lists
///
/// Actions handed out by [`ActionPool::obtain`] and the builder methods are
/// marked pooled. Releasing one resets it to default fields and stores it
/// until its kind's free list reaches `capacity`. Composite actions release
/// their children first. Releasing an action that did not come from a pool
/// drops it.
#[derive(Debug)]
pub struct ActionPool {
    free_lists: HashMap<ActionTag, Vec<Action>>,
    capacity: usize,
}

impl Default for ActionPool {
    fn default() -> Self {
        Self::new(100)
    }
}

impl ActionPool {
    /// Pool keeping at most `capacity` free actions per kind
    pub fn new(capacity: usize) -> Self {
        Self {
            free_lists: HashMap::new(),
            capacity,
        }
    }

    /// Maximum free actions kept per kind
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of free actions stored for `tag`
    pub fn free_count(&self, tag: ActionTag) -> usize {
        self.free_lists.get(&tag).map_or(0, Vec::len)
    }

    /// Reuse a free action of the given kind or create one
    pub fn obtain(&mut self, tag: ActionTag) -> Action {
        let mut action = self
            .free_lists
            .get_mut(&tag)
            .and_then(Vec::pop)
            .unwrap_or_else(|| Action::new(ActionKind::default_for(tag)));
        action.mark_pooled();
        action
    }

    /// Release an action and everything it owns
    pub fn free(&mut self, mut action: Action) {
        for child in action.drain_children() {
            self.free(child);
        }
        if !action.is_pooled() {
            return;
        }
        action.reset();
        let capacity = self.capacity;
        let list = self.free_lists.entry(action.tag()).or_default();
        if list.len() < capacity {
            list.push(action);
        } else {
            log::trace!("Action pool for {:?} is full, dropping action", action.tag());
        }
    }

    /// Drop every stored action
    pub fn clear(&mut self) {
        self.free_lists.clear();
    }

    fn obtain_kind(&mut self, kind: ActionKind) -> Action {
        let mut action = self.obtain(kind.tag());
        *action.kind_mut() = kind;
        action
    }

    /// Pooled [`Action::move_to`]
    pub fn move_to(&mut self, position: Vec3, duration: f32) -> Action {
        self.obtain_kind(ActionKind::MoveTo(TweenTo::new(position, duration, Interpolation::Linear)))
    }

    /// Pooled [`Action::move_by`]
    pub fn move_by(&mut self, offset: Vec3, duration: f32) -> Action {
        self.obtain_kind(ActionKind::MoveBy(TweenBy::new(offset, duration, Interpolation::Linear)))
    }

    /// Pooled [`Action::scale_to`]
    pub fn scale_to(&mut self, scale: Vec3, duration: f32) -> Action {
        self.obtain_kind(ActionKind::ScaleTo(TweenTo::new(scale, duration, Interpolation::Linear)))
    }

    /// Pooled [`Action::scale_by`]
    pub fn scale_by(&mut self, amount: Vec3, duration: f32) -> Action {
        self.obtain_kind(ActionKind::ScaleBy(TweenBy::new(amount, duration, Interpolation::Linear)))
    }

    /// Pooled [`Action::rotate_to`]
    pub fn rotate_to(&mut self, degrees: f32, duration: f32) -> Action {
        self.obtain_kind(ActionKind::RotateTo(TweenTo::new(degrees, duration, Interpolation::Linear)))
    }

    /// Pooled [`Action::rotate_by`]
    pub fn rotate_by(&mut self, degrees: f32, duration: f32) -> Action {
        self.obtain_kind(ActionKind::RotateBy(TweenBy::new(degrees, duration, Interpolation::Linear)))
    }

    /// Pooled [`Action::visible`]
    pub fn visible(&mut self, visible: bool) -> Action {
        self.obtain_kind(ActionKind::Visible(visible))
    }

    /// Pooled [`Action::delay`] and [`Action::delay_then`]
    pub fn delay(&mut self, duration: f32, action: Option<Action>) -> Action {
        self.obtain_kind(ActionKind::Delay(Delay::new(duration, action)))
    }

    /// Pooled [`Action::run`]
    pub fn run(&mut self, callback: impl FnMut(&mut crate::action::ActionContext<'_>) + 'static) -> Action {
        self.obtain_kind(ActionKind::Run(RunAction::new(Box::new(callback))))
    }

    /// Pooled [`Action::add_action_to`]; `None` targets the running actor
    pub fn add_action(&mut self, target: Option<ActorId>, action: Action) -> Action {
        self.obtain_kind(ActionKind::AddAction(AddAction::new(target, action)))
    }

    /// Pooled [`Action::remove_action_from`]; `None` targets the running actor
    pub fn remove_action(&mut self, target: Option<ActorId>, action: ActionId) -> Action {
        self.obtain_kind(ActionKind::RemoveAction(RemoveAction::new(target, action)))
    }

    /// Pooled [`Action::remove_actor_target`]; `None` targets the running actor
    pub fn remove_actor(&mut self, target: Option<ActorId>) -> Action {
        self.obtain_kind(ActionKind::RemoveActor(RemoveActor::new(target)))
    }

    /// Pooled [`Action::sequence`], reusing the free sequence's storage
    pub fn sequence(&mut self, actions: impl IntoIterator<Item = Action>) -> Action {
        let mut action = self.obtain(ActionTag::Sequence);
        if let ActionKind::Sequence(sequence) = action.kind_mut() {
            sequence.actions.extend(actions);
        }
        action
    }

    /// Pooled [`Action::parallel`], reusing the free parallel's storage
    pub fn parallel(&mut self, actions: impl IntoIterator<Item = Action>) -> Action {
        let mut action = self.obtain(ActionTag::Parallel);
        if let ActionKind::Parallel(parallel) = action.kind_mut() {
            parallel.actions.extend(actions);
        }
        action
    }

    /// Pooled [`Action::repeat`]
    pub fn repeat(&mut self, count: u32, action: Action) -> Action {
        self.obtain_kind(ActionKind::Repeat(Repeat::new(RepeatCount::Times(count), action)))
    }

    /// Pooled [`Action::forever`]
    pub fn forever(&mut self, action: Action) -> Action {
        self.obtain_kind(ActionKind::Repeat(Repeat::new(RepeatCount::Forever, action)))
    }

    /// Pooled [`Action::after`]
    pub fn after(&mut self, action: Action) -> Action {
        self.obtain_kind(ActionKind::After(After::new(action)))
    }

    /// Pooled [`Action::time_scale`]
    pub fn time_scale(&mut self, scale: f32, action: Action) -> Action {
        self.obtain_kind(ActionKind::TimeScale(TimeScale::new(scale, action)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_obtain_marks_pooled() {
        let mut pool = ActionPool::new(4);
        let action = pool.obtain(ActionTag::MoveBy);
        assert!(action.is_pooled());
        assert_eq!(action.tag(), ActionTag::MoveBy);
        assert!(!Action::move_by(Vec3::x(), 1.0).is_pooled());
    }

    #[test]
    fn test_freed_action_comes_back_with_default_fields() {
        let mut pool = ActionPool::new(4);
        let action = pool
            .move_to(Vec3::new(5.0, 6.0, 7.0), 3.0)
            .with_interpolation(Interpolation::Pow2);
        pool.free(action);
        assert_eq!(pool.free_count(ActionTag::MoveTo), 1);

        let reused = pool.obtain(ActionTag::MoveTo);
        assert_eq!(pool.free_count(ActionTag::MoveTo), 0);
        match reused.kind() {
            ActionKind::MoveTo(tween) => {
                assert_eq!(tween.end, Vec3::zeros());
                assert_relative_eq!(tween.timing.duration(), 0.0);
                assert!(matches!(tween.timing.interpolation(), Interpolation::Linear));
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_unpooled_actions_are_dropped() {
        let mut pool = ActionPool::new(4);
        pool.free(Action::hide());
        assert_eq!(pool.free_count(ActionTag::Visible), 0);
    }

    #[test]
    fn test_capacity_caps_free_list() {
        let mut pool = ActionPool::new(2);
        for _ in 0..5 {
            let action = pool.obtain(ActionTag::Delay);
            let extra = pool.obtain(ActionTag::Delay);
            let third = pool.obtain(ActionTag::Delay);
            pool.free(action);
            pool.free(extra);
            pool.free(third);
        }
        assert_eq!(pool.free_count(ActionTag::Delay), 2);
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn test_composites_release_children() {
        let mut pool = ActionPool::new(8);
        let inner = pool.scale_by(Vec3::repeat(1.0), 1.0);
        let repeat = pool.repeat(3, inner);
        let seq = vec![pool.move_by(Vec3::x(), 1.0), pool.visible(false), repeat];
        let action = pool.sequence(seq);
        pool.free(action);

        assert_eq!(pool.free_count(ActionTag::Sequence), 1);
        assert_eq!(pool.free_count(ActionTag::MoveBy), 1);
        assert_eq!(pool.free_count(ActionTag::Visible), 1);
        assert_eq!(pool.free_count(ActionTag::Repeat), 1);
        assert_eq!(pool.free_count(ActionTag::ScaleBy), 1);

        let reused = pool.obtain(ActionTag::Sequence);
        match reused.kind() {
            ActionKind::Sequence(sequence) => assert!(sequence.actions().is_empty()),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_visible_default_is_shown() {
        let mut pool = ActionPool::new(1);
        let hide = pool.visible(false);
        pool.free(hide);
        let reused = pool.obtain(ActionTag::Visible);
        assert!(matches!(reused.kind(), ActionKind::Visible(true)));
    }
}
