//! Playback core: the parts with real temporal logic.
//!
//! The frame clock hands out one timestamp per display refresh, the scroll
//! engine turns elapsed time and the current speed into a scroll offset,
//! the controller owns the play/pause/speed state machine, and the HUD
//! timer owns the auto-hide deadline. All of it is pure state driven from
//! the event loop; nothing here touches the terminal.

pub mod clock;
pub mod controller;
pub mod engine;
pub mod hud;

pub use clock::FrameClock;
pub use controller::PlaybackController;
pub use engine::ScrollEngine;
pub use hud::HudTimer;
