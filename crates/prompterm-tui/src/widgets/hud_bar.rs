use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Session;
use crate::input::HudButtons;
use crate::theme::Palette;

pub struct HudBarWidget;

impl HudBarWidget {
    /// Render the control bar and return the button rects for hit-testing.
    /// Returns None (and draws nothing) while the HUD is hidden.
    pub fn render(frame: &mut Frame, area: Rect, session: &Session) -> Option<HudButtons> {
        if !session.hud_visible() {
            return None;
        }

        let palette = Palette::for_contrast(session.settings.contrast);
        let play_label = if session.is_playing() { "[ || ]" } else { "[ |> ]" };
        let speed_label = format!(" {:.2}x ", session.speed());
        let slower_label = "[ - ]";
        let faster_label = "[ + ]";
        let exit_label = "[ x ]";

        let bar_width = (play_label.len()
            + slower_label.len()
            + speed_label.len()
            + faster_label.len()
            + exit_label.len()) as u16;
        if area.width < bar_width + 2 || area.height < 2 {
            return None;
        }

        let x = area.x + (area.width - bar_width) / 2;
        let y = area.y + area.height - 2;
        let bar = Rect::new(x, y, bar_width, 1);

        let style = Style::default().fg(palette.hud_fg).bg(palette.hud_bg);
        let line = Line::from(vec![
            Span::styled(play_label, style),
            Span::styled(slower_label, style),
            Span::styled(speed_label.clone(), style),
            Span::styled(faster_label, style),
            Span::styled(exit_label, style),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), bar);

        // Rects follow the span order left to right
        let mut cursor = x;
        let mut next = |len: usize| {
            let rect = Rect::new(cursor, y, len as u16, 1);
            cursor += len as u16;
            rect
        };
        let play = next(play_label.len());
        let slower = next(slower_label.len());
        next(speed_label.len());
        let faster = next(faster_label.len());
        let exit = next(exit_label.len());

        Some(HudButtons {
            play,
            slower,
            faster,
            exit,
        })
    }
}
