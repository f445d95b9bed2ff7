//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui frame, and never return effects. The only writes are the
//! `Cell<Rect>` hit areas recorded for mouse routing.

use beacon_core::catalog::SOCIETIES;
use beacon_core::session::Role;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_with_ellipsis;
use crate::features::carousel::render_carousel;
use crate::features::dashboard::render_dashboard;
use crate::state::{AppState, LandingState, Screen, Toast, ToastKind};
use crate::theme::Theme;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    match &app.screen {
        Screen::Landing(landing) => render_landing(landing, &app.theme, frame, area),
        Screen::Dashboard(dash) => render_dashboard(dash, &app.theme, frame, area),
    }

    if let Some(toast) = &app.toast {
        render_toast(toast, &app.theme, frame, area);
    }

    // Overlay last, so it appears on top
    if let Some(overlay) = &app.overlay {
        overlay.render(&app.theme, frame, area);
    }
}

fn render_landing(landing: &LandingState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // hero
            Constraint::Min(12),    // carousel
            Constraint::Length(5),  // role cards
            Constraint::Length(2),  // societies strip
            Constraint::Length(1),  // footer hints
        ])
        .split(area);

    render_hero(theme, frame, rows[0]);
    render_carousel(landing, theme, frame, rows[1]);
    render_role_cards(landing, theme, frame, rows[2]);
    render_societies(theme, frame, rows[3]);
    render_footer(theme, frame, rows[4]);
}

fn render_hero(theme: &Theme, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Beacon",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your Smart Campus Companion",
            Style::default().fg(theme.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_role_cards(landing: &LandingState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (i, role) in Role::all().iter().enumerate() {
        let selected = i == landing.selected_role;
        let border = if selected { theme.primary } else { theme.muted };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(columns[i]);
        frame.render_widget(block, columns[i]);
        landing.role_cards[i].set(columns[i]);

        let title_style = if selected {
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let lines = vec![
            Line::from(Span::styled(role.label(), title_style)),
            Line::from(Span::styled(role.tagline(), Style::default().fg(theme.muted))),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
    }
}

fn render_societies(theme: &Theme, frame: &mut Frame, area: Rect) {
    let strip = SOCIETIES.join("  ·  ");
    let lines = vec![
        Line::from(Span::styled(
            "Registered Societies",
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(&strip, area.width as usize),
            Style::default().fg(theme.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_footer(theme: &Theme, frame: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled("←/→", Style::default().fg(theme.muted).add_modifier(Modifier::BOLD)),
        Span::styled(" events  ", Style::default().fg(theme.muted)),
        Span::styled("Tab", Style::default().fg(theme.muted).add_modifier(Modifier::BOLD)),
        Span::styled(" role  ", Style::default().fg(theme.muted)),
        Span::styled("Enter", Style::default().fg(theme.muted).add_modifier(Modifier::BOLD)),
        Span::styled(" login  ", Style::default().fg(theme.muted)),
        Span::styled("Ctrl+T", Style::default().fg(theme.muted).add_modifier(Modifier::BOLD)),
        Span::styled(" theme  ", Style::default().fg(theme.muted)),
        Span::styled("q", Style::default().fg(theme.muted).add_modifier(Modifier::BOLD)),
        Span::styled(" quit", Style::default().fg(theme.muted)),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_toast(toast: &Toast, theme: &Theme, frame: &mut Frame, area: Rect) {
    let color = match toast.kind {
        ToastKind::Info => theme.primary,
        ToastKind::Success => theme.success,
        ToastKind::Error => theme.error,
    };
    let width = (toast.message.len() as u16 + 4).min(area.width);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + 1,
        width,
        3,
    )
    .intersection(area);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Center),
        inner,
    );
}
