use prompterm_core::Contrast;
use ratatui::style::Color;

/// Colors for the prompter view, derived from the contrast setting
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    /// The focus guide line at mid-screen
    pub guide: Color,
    pub hud_bg: Color,
    pub hud_fg: Color,
}

impl Palette {
    pub fn for_contrast(contrast: Contrast) -> Self {
        match contrast {
            Contrast::Light => Self {
                bg: Color::Rgb(0xff, 0xff, 0xff),
                fg: Color::Rgb(0x00, 0x00, 0x00),
                guide: Color::Rgb(0xd0, 0xd0, 0xd0),
                hud_bg: Color::Rgb(0x1f, 0x29, 0x37),
                hud_fg: Color::Rgb(0xff, 0xff, 0xff),
            },
            Contrast::Dark => Self {
                bg: Color::Rgb(0x00, 0x00, 0x00),
                fg: Color::Rgb(0xff, 0xff, 0xff),
                guide: Color::Rgb(0x40, 0x40, 0x40),
                hud_bg: Color::Rgb(0x1f, 0x29, 0x37),
                hud_fg: Color::Rgb(0xff, 0xff, 0xff),
            },
            Contrast::YellowOnBlack => Self {
                bg: Color::Rgb(0x00, 0x00, 0x00),
                fg: Color::Rgb(0xff, 0xd4, 0x00),
                guide: Color::Rgb(0x40, 0x40, 0x40),
                hud_bg: Color::Rgb(0x1f, 0x29, 0x37),
                hud_fg: Color::Rgb(0xff, 0xff, 0xff),
            },
        }
    }
}
