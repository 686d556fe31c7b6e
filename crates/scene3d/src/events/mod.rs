//! Scene events and listeners
//!
//! Events are delivered to the target actor's listeners first and then
//! bubble up through its ancestors. A listener returns `true` to consume the
//! event, which stops further delivery.

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::math::Vec3;
use crate::scene::{ActorId, FocusKinds};

/// Event payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// Pointer pressed over the target
    TouchDown {
        /// Stage x coordinate
        x: f32,
        /// Stage y coordinate
        y: f32,
        /// Pointer index
        pointer: u32,
        /// Button index
        button: u32,
    },
    /// Pointer released over the target
    TouchUp {
        /// Stage x coordinate
        x: f32,
        /// Stage y coordinate
        y: f32,
        /// Pointer index
        pointer: u32,
        /// Button index
        button: u32,
    },
    /// Pointer dragged over the target
    TouchDragged {
        /// Stage x coordinate
        x: f32,
        /// Stage y coordinate
        y: f32,
        /// Pointer index
        pointer: u32,
    },
    /// The target was resolved by the picker
    Hit {
        /// World-space point on the pick ray
        point: Vec3,
        /// Distance from the ray origin
        distance: f32,
    },
    /// The target gained or lost focus
    FocusChanged {
        /// Which focus changed
        kind: FocusKinds,
        /// `true` when gained, `false` when lost
        focused: bool,
    },
}

/// An event addressed to an actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneEvent {
    /// Actor the event was fired at
    pub target: ActorId,
    /// Actor whose listener is currently handling the event
    pub current: ActorId,
    /// Payload
    pub kind: EventKind,
}

impl SceneEvent {
    /// Create an event targeted at `target`
    pub fn new(target: ActorId, kind: EventKind) -> Self {
        Self {
            target,
            current: target,
            kind,
        }
    }
}

/// Event listener
///
/// Returns `true` if the event was consumed (stops bubbling).
pub trait Listener {
    /// Handle an event
    fn handle(&mut self, event: &SceneEvent) -> bool;
}

impl<F> Listener for F
where
    F: FnMut(&SceneEvent) -> bool,
{
    fn handle(&mut self, event: &SceneEvent) -> bool {
        self(event)
    }
}

/// Listener handle stored on actors; identity is pointer identity
pub type SharedListener = Rc<RefCell<dyn Listener>>;

/// Wrap a listener into a shareable handle
pub fn shared<L: Listener + 'static>(listener: L) -> SharedListener {
    Rc::new(RefCell::new(listener))
}

/// Whether two handles refer to the same listener
pub fn same_listener(a: &SharedListener, b: &SharedListener) -> bool {
    Rc::ptr_eq(a, b)
}
