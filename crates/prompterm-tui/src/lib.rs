pub mod app;
pub mod event;
pub mod input;
pub mod playback;
pub mod theme;
pub mod widgets;

pub use app::Session;
pub use theme::Palette;
