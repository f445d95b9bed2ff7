//! Shared rendering helpers for overlays.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the overlay area and draws its titled border, returning the inner
/// body rect.
pub fn render_overlay_container(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(Span::styled(
            format!(" {title} "),
            Style::default().fg(border_color).add_modifier(Modifier::BOLD),
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A key hint shown in the overlay footer.
pub struct InputHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl InputHint {
    pub fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Renders the footer hint row at the bottom of the overlay body.
pub fn render_hints(frame: &mut Frame, body: Rect, hints: &[InputHint], muted: Color) {
    if body.height == 0 {
        return;
    }
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(muted).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", hint.action), Style::default().fg(muted)));
    }
    let row = Rect::new(body.x, body.y + body.height - 1, body.width, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_area_fits_inside_parent() {
        let area = Rect::new(0, 0, 80, 24);
        let overlay = centered_overlay_area(area, 50, 12);
        assert_eq!(overlay.width, 50);
        assert_eq!(overlay.height, 12);
        assert!(overlay.x + overlay.width <= area.width);
        assert!(overlay.y + overlay.height <= area.height);
    }

    #[test]
    fn test_centered_area_clamps_to_small_terminals() {
        let area = Rect::new(0, 0, 30, 8);
        let overlay = centered_overlay_area(area, 50, 12);
        assert_eq!(overlay.width, 30);
        assert_eq!(overlay.height, 8);
    }
}
