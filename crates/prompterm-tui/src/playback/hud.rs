//! Transient HUD visibility with auto-hide.

use std::time::{Duration, Instant};

use prompterm_core::Debounce;

/// How long the HUD stays up after the last input
pub const HIDE_AFTER: Duration = Duration::from_millis(2000);

/// Visibility state for the control overlay.
///
/// `show` makes it visible and re-arms the single hide deadline; a later
/// `show` supersedes any pending hide. The only way it becomes hidden is
/// the deadline passing on a tick.
#[derive(Debug, Clone)]
pub struct HudTimer {
    visible: bool,
    hide: Debounce,
}

impl HudTimer {
    /// Created visible with the hide deadline already armed, matching the
    /// HUD being shown once at session start
    pub fn new(now: Instant) -> Self {
        let mut hide = Debounce::new(HIDE_AFTER);
        hide.arm(now);
        Self {
            visible: true,
            hide,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self, now: Instant) {
        self.visible = true;
        self.hide.arm(now);
    }

    pub fn tick(&mut self, now: Instant) {
        if self.hide.fire(now) {
            self.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_hides_after_inactivity() {
        let t0 = Instant::now();
        let mut hud = HudTimer::new(t0);
        assert!(hud.is_visible());

        hud.tick(t0 + 1999 * MS);
        assert!(hud.is_visible());
        hud.tick(t0 + 2000 * MS);
        assert!(!hud.is_visible());
    }

    #[test]
    fn test_show_supersedes_pending_hide() {
        let t0 = Instant::now();
        let mut hud = HudTimer::new(t0);

        hud.show(t0 + 1000 * MS);
        hud.tick(t0 + 2500 * MS);
        assert!(hud.is_visible());

        hud.tick(t0 + 3000 * MS);
        assert!(!hud.is_visible());
    }

    #[test]
    fn test_show_after_hide_revives() {
        let t0 = Instant::now();
        let mut hud = HudTimer::new(t0);
        hud.tick(t0 + 2500 * MS);
        assert!(!hud.is_visible());

        hud.show(t0 + 3000 * MS);
        assert!(hud.is_visible());
        hud.tick(t0 + 4999 * MS);
        assert!(hud.is_visible());
        hud.tick(t0 + 5000 * MS);
        assert!(!hud.is_visible());
    }
}
