//! Timed tweens
//!
//! A tween advances its elapsed time by each delta, maps
//! `min(time / duration, 1)` through its interpolation and writes the result
//! to one property of the actor. The terminal step writes the exact end
//! value, so no interpolation drift survives completion.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use crate::action::Interpolation;

/// Values a tween can animate
pub trait Tweenable:
    Copy + PartialEq + Default + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
}

impl<T> Tweenable for T where
    T: Copy + PartialEq + Default + Debug + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>
{
}

/// Duration, elapsed time and easing of a tween
#[derive(Debug, Clone, Copy, Default)]
pub struct Timing {
    duration: f32,
    time: f32,
    interpolation: Interpolation,
}

impl Timing {
    /// Timing of `duration` seconds with the given easing
    pub fn new(duration: f32, interpolation: Interpolation) -> Self {
        Self {
            duration,
            time: 0.0,
            interpolation,
        }
    }

    /// Total duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Elapsed time in seconds
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Easing curve
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub(crate) fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    /// Advance by `delta`; returns the eased progress and whether the tween
    /// is complete. Non-positive durations complete on the first step.
    pub(crate) fn advance(&mut self, delta: f32) -> (f32, bool) {
        self.time += delta;
        let complete = self.time >= self.duration;
        let percent = if complete {
            1.0
        } else {
            self.interpolation.apply(self.time / self.duration)
        };
        (percent, complete)
    }

    pub(crate) fn restart(&mut self) {
        self.time = 0.0;
    }
}

/// Tween towards an absolute end value
#[derive(Debug, Clone, Default)]
pub struct TweenTo<T: Tweenable> {
    /// Timing and easing
    pub timing: Timing,
    /// Value captured when the tween began
    pub start: T,
    /// Target value
    pub end: T,
}

impl<T: Tweenable> TweenTo<T> {
    /// Tween to `end` over `duration` seconds
    pub fn new(end: T, duration: f32, interpolation: Interpolation) -> Self {
        Self {
            timing: Timing::new(duration, interpolation),
            start: T::default(),
            end,
        }
    }

    pub(crate) fn begin(&mut self, current: T) {
        self.start = current;
    }

    /// Advance and return the value to write plus completion
    pub(crate) fn step(&mut self, delta: f32) -> (T, bool) {
        let (percent, complete) = self.timing.advance(delta);
        if complete {
            (self.end, true)
        } else {
            (self.start + (self.end - self.start) * percent, false)
        }
    }
}

/// Tween by a relative amount
///
/// Each step applies only the change since the previous step, so several
/// relative tweens on the same property add up. When nothing else has
/// written the property since the tween began, the terminal step writes
/// `start + amount` exactly.
#[derive(Debug, Clone, Default)]
pub struct TweenBy<T: Tweenable> {
    /// Timing and easing
    pub timing: Timing,
    /// Total change
    pub amount: T,
    start: T,
    applied: f32,
    last_written: T,
    shared: bool,
}

impl<T: Tweenable> TweenBy<T> {
    /// Tween by `amount` over `duration` seconds
    pub fn new(amount: T, duration: f32, interpolation: Interpolation) -> Self {
        Self {
            timing: Timing::new(duration, interpolation),
            amount,
            ..Self::default()
        }
    }

    pub(crate) fn begin(&mut self, current: T) {
        self.start = current;
        self.applied = 0.0;
        self.last_written = current;
        self.shared = false;
    }

    /// Advance from the property's `current` value; returns the value to
    /// write plus completion
    pub(crate) fn step(&mut self, delta: f32, current: T) -> (T, bool) {
        let (percent, complete) = self.timing.advance(delta);
        self.shared |= current != self.last_written;
        let value = if complete && !self.shared {
            self.start + self.amount
        } else {
            current + self.amount * (percent - self.applied)
        };
        self.applied = percent;
        self.last_written = value;
        (value, complete)
    }
}
