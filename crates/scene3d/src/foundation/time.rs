//! Frame timing

/// Frame timer feeding `Scene::update`
///
/// Clamps each reported delta so a long stall (debugger, window drag) does
/// not make every running action jump to its end in a single frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    elapsed: f32,
    frames: u64,
    max_delta: f32,
}

impl FrameClock {
    /// Clock whose deltas never exceed `max_delta` seconds
    pub fn new(max_delta: f32) -> Self {
        Self {
            elapsed: 0.0,
            frames: 0,
            max_delta,
        }
    }

    /// Start a frame `seconds` after the previous one
    pub fn advance(&mut self, seconds: f32) -> f32 {
        let delta = clamp_delta(seconds, self.max_delta);
        self.elapsed += delta;
        self.frames += 1;
        delta
    }

    /// Sum of all clamped deltas
    pub fn total_time(&self) -> f32 {
        self.elapsed
    }

    /// Frames started so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

/// Clamp a frame delta into `[0, max_delta]`
pub fn clamp_delta(delta: f32, max_delta: f32) -> f32 {
    if max_delta > 0.0 {
        delta.clamp(0.0, max_delta)
    } else {
        delta.max(0.0)
    }
}
