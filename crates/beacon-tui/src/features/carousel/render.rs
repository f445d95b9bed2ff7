//! Draws the carousel panel and records its hit rectangles.
//!
//! Rendering is read-only with respect to the cursor; the only writes are
//! the `Cell<Rect>` hit areas that the mouse adapter resolves against on
//! the next input event.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::truncate_with_ellipsis;
use crate::state::LandingState;
use crate::theme::Theme;

use super::update::INDICATOR_SLOT_WIDTH;

/// Renders the carousel into `area` and stores the surface, arrow, register
/// button, and indicator strip rectangles on `landing` for hit-testing.
pub fn render_carousel(landing: &LandingState, theme: &Theme, frame: &mut Frame, area: Rect) {
    landing.surface.set(area);

    let entry = landing.carousel.current();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(Line::from(Span::styled(
            " Upcoming Events ",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 10 || inner.height < 6 {
        // Too cramped to draw controls; surface scroll still works.
        landing.prev_arrow.set(Rect::default());
        landing.next_arrow.set(Rect::default());
        landing.register.set(Rect::default());
        landing.indicators.set(Rect::default());
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(inner);

    render_arrow(frame, columns[0], "‹", theme);
    render_arrow(frame, columns[2], "›", theme);
    landing.prev_arrow.set(columns[0]);
    landing.next_arrow.set(columns[2]);

    let content = columns[1];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // art
            Constraint::Length(1), // discipline badge
            Constraint::Length(1), // title
            Constraint::Length(1), // date and time
            Constraint::Length(1), // venue
            Constraint::Min(0),    // spacer
            Constraint::Length(1), // register button
            Constraint::Length(1), // indicator strip
        ])
        .split(content);

    let width = content.width as usize;
    let centered = |text: String, style: Style| {
        Paragraph::new(Line::from(Span::styled(
            truncate_with_ellipsis(&text, width),
            style,
        )))
        .alignment(Alignment::Center)
    };

    frame.render_widget(
        centered(entry.art.to_string(), Style::default().fg(theme.accent)),
        rows[0],
    );
    frame.render_widget(
        centered(
            format!("[ {} ]", entry.discipline),
            Style::default().fg(theme.secondary),
        ),
        rows[1],
    );
    frame.render_widget(
        centered(
            entry.title.to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        rows[2],
    );
    frame.render_widget(
        centered(
            format!("{}  {}", entry.date, entry.time),
            Style::default().fg(theme.muted),
        ),
        rows[3],
    );
    frame.render_widget(
        centered(entry.venue.to_string(), Style::default().fg(theme.muted)),
        rows[4],
    );

    // Register button, centered within its row
    let label = " Register ";
    let button_width = label.len() as u16;
    let button = centered_rect(rows[6], button_width);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default()
                .fg(theme.on_primary)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))),
        button,
    );
    landing.register.set(button);

    // Indicator strip, one fixed-width slot per entry
    let states = landing.carousel.indicator_states();
    let strip_width = INDICATOR_SLOT_WIDTH * states.len() as u16;
    let strip = centered_rect(rows[7], strip_width);
    let mut spans = Vec::with_capacity(states.len());
    for active in &states {
        if *active {
            spans.push(Span::styled("━━ ", Style::default().fg(theme.primary)));
        } else {
            spans.push(Span::styled("─  ", Style::default().fg(theme.muted)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), strip);
    landing.indicators.set(strip);
}

fn render_arrow(frame: &mut Frame, column: Rect, glyph: &str, theme: &Theme) {
    let mid = column.y + column.height / 2;
    let row = Rect::new(column.x, mid, column.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            glyph,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        row,
    );
}

/// A `width`-wide rect horizontally centered within `row`.
fn centered_rect(row: Rect, width: u16) -> Rect {
    let width = width.min(row.width);
    let x = row.x + (row.width - width) / 2;
    Rect::new(x, row.y, width, row.height)
}
