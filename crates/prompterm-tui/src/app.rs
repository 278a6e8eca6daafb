use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseEvent};
use prompterm_core::{Debounce, Script, Settings};

use crate::input::{self, Action, HudButtons, PointerTracker, SPEED_STEP};
use crate::playback::{HudTimer, PlaybackController, ScrollEngine};

/// Quiet period before a settings change is persisted
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Playback session state.
///
/// Constructed at playback start and discarded when the session ends;
/// nothing here outlives it except the settings, which the caller flushes
/// back to the store. All mutation happens on the event loop thread, in
/// response to input events and frame ticks.
pub struct Session {
    pub settings: Settings,
    pub script: Script,
    controller: PlaybackController,
    engine: ScrollEngine,
    hud: HudTimer,
    tracker: PointerTracker,
    save: Debounce,
    settings_dirty: bool,
    hud_buttons: Option<HudButtons>,
    should_quit: bool,
}

impl Session {
    pub fn new(settings: Settings, script: Script, double_tap_window: Duration, now: Instant) -> Self {
        let controller = PlaybackController::new(settings.speed);
        let tracker = PointerTracker::new(settings.units_per_row(), double_tap_window);
        Self {
            settings,
            script,
            controller,
            engine: ScrollEngine::new(),
            hud: HudTimer::new(now),
            tracker,
            save: Debounce::new(SAVE_DEBOUNCE),
            settings_dirty: false,
            hud_buttons: None,
            should_quit: false,
        }
    }

    pub fn offset(&self) -> f64 {
        self.engine.offset()
    }

    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    pub fn speed(&self) -> f64 {
        self.controller.speed()
    }

    pub fn hud_visible(&self) -> bool {
        self.hud.is_visible()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Recorded by the HUD widget at render time for hit-testing
    pub fn set_hud_buttons(&mut self, buttons: Option<HudButtons>) {
        self.hud_buttons = buttons;
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let action = input::handle_key_event(key);
        self.apply(action, now);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        // Buttons are only hit-testable while the HUD is up
        let buttons = if self.hud.is_visible() {
            self.hud_buttons
        } else {
            None
        };
        let action = input::handle_mouse_event(mouse, buttons.as_ref(), &mut self.tracker, now);
        self.apply(action, now);
    }

    /// Apply a routed command
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::TogglePlay => {
                self.controller.toggle_play();
                self.hud.show(now);
            }
            Action::SpeedUp => {
                self.controller.adjust_speed(SPEED_STEP);
                self.speed_changed(now);
            }
            Action::SpeedDown => {
                self.controller.adjust_speed(-SPEED_STEP);
                self.speed_changed(now);
            }
            Action::SetSpeedPreset(preset) => {
                self.controller.set_speed(preset as f64);
                self.speed_changed(now);
            }
            Action::ToggleMirror => {
                self.settings.mirror_h = !self.settings.mirror_h;
                self.mark_dirty(now);
                self.hud.show(now);
            }
            Action::RequestFullscreen => {
                // Terminal emulators expose no fullscreen control; the
                // alternate screen already fills the window
                tracing::debug!("fullscreen request unsupported, ignoring");
            }
            Action::ExitSession => {
                tracing::debug!("fullscreen exit unsupported, ignoring");
                self.should_quit = true;
            }
            Action::Back => {
                self.should_quit = true;
            }
            Action::ShowHud => {
                self.hud.show(now);
            }
            Action::None => {}
        }
    }

    /// Advance one frame. Returns true when a debounced settings write is
    /// due; the caller owns the actual flush.
    pub fn on_tick(&mut self, now_ms: f64, now: Instant) -> bool {
        self.engine
            .tick(now_ms, self.controller.is_playing(), self.controller.speed());
        self.hud.tick(now);

        // The caller clears the dirty flag via settings_flushed once the
        // write actually lands
        self.save.fire(now) && self.settings_dirty
    }

    /// True when a settings change is still waiting for its quiet period;
    /// teardown flushes it regardless
    pub fn has_unsaved_settings(&self) -> bool {
        self.settings_dirty
    }

    pub fn settings_flushed(&mut self) {
        self.settings_dirty = false;
        self.save.cancel();
    }

    fn speed_changed(&mut self, now: Instant) {
        self.settings.speed = self.controller.speed();
        self.mark_dirty(now);
        self.hud.show(now);
    }

    fn mark_dirty(&mut self, now: Instant) {
        self.settings_dirty = true;
        self.save.arm(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    const MS: Duration = Duration::from_millis(1);

    fn session(now: Instant) -> Session {
        Session::new(
            Settings::default(),
            Script::from_text("line one\nline two"),
            Duration::from_millis(300),
            now,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_toggles_and_shows_hud() {
        let t0 = Instant::now();
        let mut s = session(t0);

        // Let the session-start HUD lapse first
        s.on_tick(0.0, t0 + 2500 * MS);
        assert!(!s.hud_visible());

        s.handle_key(key(KeyCode::Char(' ')), t0 + 3000 * MS);
        assert!(s.is_playing());
        assert!(s.hud_visible());
    }

    #[test]
    fn test_held_key_repeats_change_nothing() {
        let t0 = Instant::now();
        let mut s = session(t0);
        s.handle_key(key(KeyCode::Char(' ')), t0);
        assert!(s.is_playing());

        // Auto-repeats of the still-held space bar must not re-toggle
        let held = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        for _ in 0..5 {
            s.handle_key(held, t0);
        }
        assert!(s.is_playing());

        let speed = s.speed();
        let held_up = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        s.handle_key(held_up, t0);
        assert_eq!(s.speed(), speed);
    }

    #[test]
    fn test_playback_scenario() {
        let t0 = Instant::now();
        let mut s = session(t0);
        assert_eq!(s.speed(), 2.0);
        assert!(!s.is_playing());

        s.on_tick(0.0, t0);
        s.apply(Action::TogglePlay, t0);
        s.on_tick(1000.0, t0);
        assert!((s.offset() - -100.0).abs() < 1e-9);

        // +1.0 via ten arrow steps
        for _ in 0..10 {
            s.apply(Action::SpeedUp, t0);
        }
        assert_eq!(s.speed(), 3.0);
        s.on_tick(1500.0, t0);
        assert!((s.offset() - -175.0).abs() < 1e-9);
    }

    #[test]
    fn test_paused_offset_invariant() {
        let t0 = Instant::now();
        let mut s = session(t0);
        s.on_tick(0.0, t0);
        s.on_tick(10_000.0, t0);
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn test_mirror_toggle_persists_after_quiet_period() {
        let t0 = Instant::now();
        let mut s = session(t0);
        assert!(!s.settings.mirror_h);

        s.apply(Action::ToggleMirror, t0);
        assert!(s.settings.mirror_h);
        assert!(s.has_unsaved_settings());

        // Still inside the quiet period
        assert!(!s.on_tick(0.0, t0 + 100 * MS));
        // A second change restarts the wait
        s.apply(Action::ToggleMirror, t0 + 100 * MS);
        assert!(!s.on_tick(0.0, t0 + 200 * MS));
        // Quiet period elapsed: flush exactly once
        assert!(s.on_tick(0.0, t0 + 250 * MS));
        assert!(!s.on_tick(0.0, t0 + 300 * MS));
    }

    #[test]
    fn test_speed_preset_updates_settings() {
        let t0 = Instant::now();
        let mut s = session(t0);
        s.apply(Action::SetSpeedPreset(3), t0);
        assert_eq!(s.speed(), 3.0);
        assert_eq!(s.settings.speed, 3.0);
        assert!(s.has_unsaved_settings());
    }

    #[test]
    fn test_fullscreen_request_changes_nothing() {
        let t0 = Instant::now();
        let mut s = session(t0);
        let speed = s.speed();
        s.handle_key(key(KeyCode::Char('f')), t0);
        assert_eq!(s.speed(), speed);
        assert!(!s.is_playing());
        assert!(!s.should_quit());
    }

    #[test]
    fn test_escape_ends_session() {
        let t0 = Instant::now();
        let mut s = session(t0);
        s.handle_key(key(KeyCode::Esc), t0);
        assert!(s.should_quit());
    }

    #[test]
    fn test_exit_control_ends_session() {
        let t0 = Instant::now();
        let mut s = session(t0);
        s.apply(Action::ExitSession, t0);
        assert!(s.should_quit());
    }

    #[test]
    fn test_hud_starts_visible_and_hides() {
        let t0 = Instant::now();
        let mut s = session(t0);
        assert!(s.hud_visible());
        s.on_tick(0.0, t0 + 2000 * MS);
        assert!(!s.hud_visible());
    }
}
