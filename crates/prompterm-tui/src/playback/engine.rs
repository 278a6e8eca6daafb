//! Continuous-time scroll accumulator.

/// Distance units scrolled per second at speed 1.0
pub const BASE_RATE: f64 = 50.0;

/// Converts elapsed frame time and the current speed into a scroll offset.
///
/// The engine ticks every frame whether or not playback is running. While
/// paused only the timestamp advances, so the first frame after resume
/// sees a dt of one frame, not the whole pause — no jump on resume. The
/// offset grows negative as the script moves up, matching the upward
/// scroll direction.
#[derive(Debug, Clone, Default)]
pub struct ScrollEngine {
    offset: f64,
    last_timestamp: Option<f64>,
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative scroll distance since playback began (non-positive)
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Advance to `now` (milliseconds). Applies movement only while
    /// playing; the first tick of a session just records the timestamp.
    pub fn tick(&mut self, now_ms: f64, playing: bool, speed: f64) -> f64 {
        if let Some(last) = self.last_timestamp {
            // A clock report at or before the previous frame moves nothing
            let dt = (now_ms - last).max(0.0);
            if playing {
                self.offset -= dt * BASE_RATE * speed / 1000.0;
            }
        }
        self.last_timestamp = Some(now_ms);
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.last_timestamp = None;
    }
}
