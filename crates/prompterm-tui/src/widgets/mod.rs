mod hud_bar;
mod prompter;

pub use hud_bar::HudBarWidget;
pub use prompter::PrompterWidget;
