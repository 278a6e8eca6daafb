//! Play/pause and speed state machine.

pub const MIN_SPEED: f64 = 0.0;
pub const MAX_SPEED: f64 = 5.0;

/// Owns the play flag and the speed multiplier.
///
/// Every mutation leaves `speed` clamped to `[0, 5]` and rounded to two
/// decimals; pushing past a bound saturates silently. Speed 0 while
/// playing is a valid state — playing but stationary.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    playing: bool,
    speed: f64,
}

impl PlaybackController {
    /// Starts paused, with the initial speed normalized the same way any
    /// later command would leave it
    pub fn new(initial_speed: f64) -> Self {
        Self {
            playing: false,
            speed: normalize(initial_speed),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        tracing::debug!(playing = self.playing, "playback toggled");
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = normalize(speed);
    }

    pub fn adjust_speed(&mut self, delta: f64) {
        self.speed = normalize(self.speed + delta);
    }
}

fn normalize(speed: f64) -> f64 {
    (speed.clamp(MIN_SPEED, MAX_SPEED) * 100.0).round() / 100.0
}
