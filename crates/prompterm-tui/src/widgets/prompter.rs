use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::Session;
use crate::theme::Palette;

/// Fraction of the screen height where the first script line starts, so
/// text scrolls up toward the guide rather than popping in at the top
const START_FRACTION: f64 = 0.6;

pub struct PrompterWidget;

impl PrompterWidget {
    pub fn render(frame: &mut Frame, area: Rect, session: &Session) {
        let palette = Palette::for_contrast(session.settings.contrast);
        let height = area.height as usize;
        let width = area.width as usize;
        if height == 0 || width == 0 {
            return;
        }

        // line_width counts full-width characters (two columns each)
        let max_cols = (session.settings.line_width as usize * 2)
            .clamp(1, width.saturating_sub(2).max(1));
        let wrapped = wrap_lines(session.script.lines(), max_cols);

        // Scroll offset in rows; the engine accumulates negative units
        let row_offset = session.offset() / session.settings.units_per_row();
        let start = area.height as f64 * START_FRACTION + row_offset;

        let guide_row = height / 2;
        let mut rows: Vec<Line> = (0..height)
            .map(|r| {
                if r == guide_row {
                    Line::from(Span::styled(
                        "─".repeat(width),
                        Style::default().fg(palette.guide),
                    ))
                } else {
                    Line::default()
                }
            })
            .collect();

        for (i, text) in wrapped.iter().enumerate() {
            let y = (start + i as f64).floor() as i64;
            if y < 0 || y >= height as i64 {
                continue;
            }
            let y = if session.settings.mirror_v {
                height as i64 - 1 - y
            } else {
                y
            } as usize;

            let rendered = if session.settings.mirror_h {
                text.chars().rev().collect::<String>()
            } else {
                text.clone()
            };
            let pad = width.saturating_sub(rendered.width()) / 2;
            rows[y] = Line::from(vec![
                Span::raw(" ".repeat(pad)),
                Span::styled(rendered, Style::default().fg(palette.fg)),
            ]);
        }

        let paragraph =
            Paragraph::new(Text::from(rows)).style(Style::default().bg(palette.bg));
        frame.render_widget(paragraph, area);
    }
}

/// Greedy wrap on character boundaries, column-width aware
fn wrap_lines(lines: &[String], max_cols: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in lines {
        if line.width() <= max_cols {
            out.push(line.clone());
            continue;
        }
        let mut current = String::new();
        let mut cols = 0usize;
        for ch in line.chars() {
            let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if cols + w > max_cols && !current.is_empty() {
                out.push(std::mem::take(&mut current));
                cols = 0;
            }
            current.push(ch);
            cols += w;
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wrap_preserves_short_lines() {
        let wrapped = wrap_lines(&lines(&["short", ""]), 40);
        assert_eq!(wrapped, vec!["short".to_string(), String::new()]);
    }

    #[test]
    fn test_wrap_splits_on_column_budget() {
        let wrapped = wrap_lines(&lines(&["abcdefghij"]), 4);
        assert_eq!(wrapped, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_counts_wide_chars_as_two() {
        let wrapped = wrap_lines(&lines(&["全形字測試"]), 4);
        assert_eq!(wrapped, vec!["全形", "字測", "試"]);
    }
}
