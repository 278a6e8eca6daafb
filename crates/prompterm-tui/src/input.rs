//! Input router: raw terminal events to playback commands.
//!
//! Each physical event maps to exactly one command. Key repeats never get
//! here (the event handler forwards press events only), but the router
//! guards on the kind anyway so it stays safe when driven directly.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Vertical drag distance (in scroll units) that triggers one speed step
pub const DRAG_THRESHOLD: f64 = 50.0;

/// Speed change per step (keyboard arrow or drag increment)
pub const SPEED_STEP: f64 = 0.1;

/// Command produced by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePlay,
    SpeedUp,
    SpeedDown,
    /// Quick-select preset (1, 2 or 3)
    SetSpeedPreset(u8),
    /// Toggle horizontal mirroring in settings
    ToggleMirror,
    /// Leave the session (the routing collaborator owns where "back" goes)
    Back,
    /// Best-effort fullscreen request
    RequestFullscreen,
    /// Exit control: fullscreen-exit then back
    ExitSession,
    /// No command, but input activity happened (keeps the HUD up)
    ShowHud,
    None,
}

/// Map a key press to its command
pub fn handle_key_event(key: KeyEvent) -> Action {
    // A held key auto-repeats the same physical press; only the first,
    // non-repeated occurrence is honored
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::TogglePlay,
        (KeyCode::Up, KeyModifiers::NONE) => Action::SpeedUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::SpeedDown,
        (KeyCode::Char('1'), KeyModifiers::NONE) => Action::SetSpeedPreset(1),
        (KeyCode::Char('2'), KeyModifiers::NONE) => Action::SetSpeedPreset(2),
        (KeyCode::Char('3'), KeyModifiers::NONE) => Action::SetSpeedPreset(3),
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMirror,
        (KeyCode::Char('M'), KeyModifiers::SHIFT) => Action::ToggleMirror,
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::RequestFullscreen,
        (KeyCode::Char('F'), KeyModifiers::SHIFT) => Action::RequestFullscreen,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Back,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Back,
        _ => Action::None,
    }
}

/// Hit rects for the on-screen HUD controls, recorded at render time
#[derive(Debug, Clone, Copy, Default)]
pub struct HudButtons {
    pub play: Rect,
    pub slower: Rect,
    pub faster: Rect,
    pub exit: Rect,
}

impl HudButtons {
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);
        if self.play.contains(pos) {
            Some(Action::TogglePlay)
        } else if self.slower.contains(pos) {
            Some(Action::SpeedDown)
        } else if self.faster.contains(pos) {
            Some(Action::SpeedUp)
        } else if self.exit.contains(pos) {
            Some(Action::ExitSession)
        } else {
            None
        }
    }
}

/// Continuous drag gesture state plus double-tap detection.
///
/// Terminal mouse positions arrive in cell rows; the tracker converts them
/// to scroll units (`units_per_row`) so the 50-unit threshold means the
/// same physical distance as in the scroll engine. On each threshold
/// crossing the baseline rebases to the current position, so a long drag
/// keeps stepping instead of firing once per press.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    units_per_row: f64,
    double_tap_window: Duration,
    baseline: Option<f64>,
    last_press: Option<Instant>,
}

impl PointerTracker {
    pub fn new(units_per_row: f64, double_tap_window: Duration) -> Self {
        Self {
            units_per_row: units_per_row.max(1.0),
            double_tap_window,
            baseline: None,
            last_press: None,
        }
    }

    /// Button press away from any HUD control: starts a drag baseline, or
    /// completes a double-tap
    pub fn press(&mut self, row: u16, now: Instant) -> Action {
        let y = row as f64 * self.units_per_row;
        self.baseline = Some(y);

        if let Some(prev) = self.last_press.take() {
            if now.duration_since(prev) <= self.double_tap_window {
                // Consumed: a third press starts a fresh window
                return Action::TogglePlay;
            }
        }
        self.last_press = Some(now);
        Action::ShowHud
    }

    /// Drag to a new row; steps speed each time the distance from the
    /// baseline exceeds the threshold, rebasing as it goes
    pub fn drag(&mut self, row: u16) -> Action {
        let Some(baseline) = self.baseline else {
            return Action::None;
        };
        let y = row as f64 * self.units_per_row;
        let dy = y - baseline;
        if dy.abs() > DRAG_THRESHOLD {
            self.baseline = Some(y);
            // Screen-down is positive dy; dragging down slows the scroll
            if dy > 0.0 {
                Action::SpeedDown
            } else {
                Action::SpeedUp
            }
        } else {
            Action::None
        }
    }

    pub fn release(&mut self) {
        self.baseline = None;
    }
}

/// Route a mouse event, preferring HUD buttons over gestures
pub fn handle_mouse_event(
    mouse: MouseEvent,
    buttons: Option<&HudButtons>,
    tracker: &mut PointerTracker,
    now: Instant,
) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = buttons.and_then(|b| b.hit(mouse.column, mouse.row)) {
                return action;
            }
            tracker.press(mouse.row, now)
        }
        MouseEventKind::Drag(MouseButton::Left) => tracker.drag(mouse.row),
        MouseEventKind::Up(MouseButton::Left) => {
            tracker.release();
            Action::None
        }
        _ => Action::None,
    }
}
