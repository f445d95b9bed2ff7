//! Dashboard view: header, sidebar menu, and the active section panel.

use beacon_core::session::Role;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::theme::Theme;

use super::content;
use super::state::DashboardState;

/// Renders the dashboard for the signed-in session and records the sidebar
/// menu rect for click routing.
pub fn render_dashboard(dash: &DashboardState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_header(dash, theme, frame, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(rows[1]);

    render_menu(dash, theme, frame, body[0]);
    render_section(dash, theme, frame, body[1]);
}

fn render_header(dash: &DashboardState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let title = dash.session.role.dashboard_title();
    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Welcome back, ", Style::default().fg(theme.muted)),
            Span::styled(dash.session.email.clone(), Style::default().fg(theme.text)),
            Span::styled(
                "   Esc logout  Ctrl+T theme  Ctrl+C quit",
                Style::default().fg(theme.muted),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_menu(dash: &DashboardState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted))
        .title(" Menu ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    dash.menu.set(inner);

    let items: Vec<ListItem> = dash
        .sections()
        .iter()
        .map(|s| ListItem::new(Line::from(Span::styled(s.label, Style::default().fg(theme.text)))))
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme.primary)
                .fg(theme.on_primary)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(dash.selected()));
    frame.render_stateful_widget(list, inner, &mut state);
}

fn render_section(dash: &DashboardState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let section = dash.current();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(format!(" {} ", section.label));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match (dash.session.role, section.id) {
        (Role::Student, "pinboard") => announcement_lines(theme),
        (Role::Student, "timetable") => timetable_lines(content::STUDENT_SLOTS, theme),
        (Role::Student, "attendance") => attendance_lines(theme),
        (Role::Student, "assignments") => assignment_lines(theme),
        (Role::Faculty, "attendance") => roster_lines(theme),
        (Role::Faculty, "timetable") => timetable_lines(content::FACULTY_SLOTS, theme),
        (Role::Club, "members") => member_lines(theme),
        _ => placeholder_lines(theme),
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn announcement_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for a in content::STUDENT_ANNOUNCEMENTS {
        let tag_color = match a.tag {
            "important" => theme.error,
            "event" => theme.accent,
            _ => theme.secondary,
        };
        lines.push(Line::from(vec![
            Span::styled(a.from, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(format!("[{}]", a.tag), Style::default().fg(tag_color)),
            Span::raw("  "),
            Span::styled(a.time, Style::default().fg(theme.muted)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", a.message),
            Style::default().fg(theme.text),
        )));
        lines.push(Line::default());
    }
    lines
}

fn timetable_lines(slots: &'static [content::Slot], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for day in content::WEEKDAYS {
        lines.push(Line::from(Span::styled(
            *day,
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        )));
        for slot in slots {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", slot.time), Style::default().fg(theme.text)),
                Span::styled(format!("  {}", slot.detail), Style::default().fg(theme.muted)),
            ]));
        }
        lines.push(Line::default());
    }
    lines
}

fn attendance_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for row in content::ATTENDANCE {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<20}", row.subject),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{}/{}", row.attended, row.total),
                Style::default().fg(theme.text),
            ),
            Span::raw("  "),
            Span::styled(row.percentage, Style::default().fg(theme.success)),
        ]));
    }
    lines
}

fn assignment_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for card in content::STUDENT_ASSIGNMENTS {
        lines.push(Line::from(vec![
            Span::styled(
                card.title,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(card.due, Style::default().fg(theme.warning)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", card.detail),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::default());
    }
    lines
}

fn roster_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Today's Classes",
        Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
    ))];
    for s in content::FACULTY_STUDENTS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", s.name), Style::default().fg(theme.text)),
            Span::styled(s.roll_no, Style::default().fg(theme.muted)),
        ]));
    }
    lines
}

fn member_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for m in content::CLUB_MEMBERS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", m.name),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{:<16}", m.position), Style::default().fg(theme.accent)),
            Span::styled(m.email, Style::default().fg(theme.muted)),
        ]));
    }
    lines
}

fn placeholder_lines(theme: &Theme) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        "This section is under development.",
        Style::default().fg(theme.muted),
    ))]
}
