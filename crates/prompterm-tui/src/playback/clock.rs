use std::time::Instant;

/// Session clock for frame timestamps.
///
/// Yields milliseconds since session start as f64, monotonic because it is
/// backed by `Instant`. The event loop reads it once per frame and feeds
/// the value to the scroll engine; input handlers read `instant()` for the
/// deadline timers.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since session start
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    /// The current instant, for deadline timers
    pub fn instant(&self) -> Instant {
        Instant::now()
    }
}
