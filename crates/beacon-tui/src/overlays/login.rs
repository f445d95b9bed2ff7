//! Login overlay.
//!
//! One form per role: every role asks for email and password, faculty adds
//! a serial number, and club logins pick a society and a position. The form
//! validates locally and produces a [`Session`] on success; there is no
//! credential check beyond presence.

use beacon_core::catalog::SOCIETIES;
use beacon_core::session::{Role, Session};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::render_utils::{InputHint, centered_overlay_area, render_hints, render_overlay_container};
use super::{OverlayTransition, OverlayUpdate};
use crate::theme::Theme;

/// A single form field, identified independently of focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldId {
    Email,
    Serial,
    Society,
    Hierarchy,
    Password,
}

/// State for the login overlay.
#[derive(Debug)]
pub struct LoginState {
    pub role: Role,
    email: String,
    password: String,
    serial: String,
    society: Option<usize>,
    hierarchy: String,
    focus: usize,
    error: Option<String>,
}

impl LoginState {
    pub fn open(role: Role) -> Self {
        Self {
            role,
            email: String::new(),
            password: String::new(),
            serial: String::new(),
            society: None,
            hierarchy: String::new(),
            focus: 0,
            error: None,
        }
    }

    /// Field order for this role's form.
    fn fields(&self) -> &'static [FieldId] {
        match self.role {
            Role::Student => &[FieldId::Email, FieldId::Password],
            Role::Faculty => &[FieldId::Email, FieldId::Serial, FieldId::Password],
            Role::Club => &[
                FieldId::Email,
                FieldId::Society,
                FieldId::Hierarchy,
                FieldId::Password,
            ],
        }
    }

    fn focused(&self) -> FieldId {
        self.fields()[self.focus]
    }

    fn text_field_mut(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::Email => Some(&mut self.email),
            FieldId::Serial => Some(&mut self.serial),
            FieldId::Hierarchy => Some(&mut self.hierarchy),
            FieldId::Password => Some(&mut self.password),
            FieldId::Society => None,
        }
    }

    fn cycle_society(&mut self, forward: bool) {
        let len = SOCIETIES.len();
        self.society = Some(match self.society {
            None => {
                if forward {
                    0
                } else {
                    len - 1
                }
            }
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
        });
    }

    /// Validates the form and builds a session.
    fn submit(&mut self) -> Option<Session> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some("Please fill in all required fields".to_string());
            return None;
        }
        match self.role {
            Role::Student => Some(Session::new(Role::Student, self.email.trim(), None)),
            Role::Faculty => {
                if self.serial.trim().is_empty() {
                    self.error = Some("Faculty serial number is required".to_string());
                    return None;
                }
                Some(Session::new(
                    Role::Faculty,
                    self.email.trim(),
                    Some(self.serial.trim().to_string()),
                ))
            }
            Role::Club => {
                let Some(society) = self.society else {
                    self.error = Some("Society name and hierarchy are required".to_string());
                    return None;
                };
                if self.hierarchy.trim().is_empty() {
                    self.error = Some("Society name and hierarchy are required".to_string());
                    return None;
                }
                Some(Session::new(
                    Role::Club,
                    self.email.trim(),
                    Some(format!("{} / {}", SOCIETIES[society], self.hierarchy.trim())),
                ))
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Clear the error on any edit so stale messages do not linger
        if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.error = None;
        }

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Enter => match self.submit() {
                Some(session) => OverlayUpdate {
                    transition: OverlayTransition::Complete(session),
                    effects: Vec::new(),
                },
                None => OverlayUpdate::stay(),
            },
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields().len();
                OverlayUpdate::stay()
            }
            KeyCode::BackTab | KeyCode::Up => {
                let len = self.fields().len();
                self.focus = (self.focus + len - 1) % len;
                OverlayUpdate::stay()
            }
            KeyCode::Left if self.focused() == FieldId::Society => {
                self.cycle_society(false);
                OverlayUpdate::stay()
            }
            KeyCode::Right if self.focused() == FieldId::Society => {
                self.cycle_society(true);
                OverlayUpdate::stay()
            }
            KeyCode::Backspace => {
                let id = self.focused();
                if let Some(field) = self.text_field_mut(id) {
                    field.pop();
                }
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                let id = self.focused();
                if let Some(field) = self.text_field_mut(id) {
                    field.push(c);
                }
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        let fields = self.fields();
        // Two rows per field, plus error row and hint row
        let height = fields.len() as u16 * 2 + 5;
        let overlay = centered_overlay_area(area, 48, height);
        let body = render_overlay_container(frame, overlay, self.role.label(), theme.primary);

        let mut y = body.y;
        for (i, id) in fields.iter().enumerate() {
            // Stop if the terminal is too short for the whole form
            if y + 1 >= body.y + body.height {
                break;
            }
            let focused = i == self.focus;
            let label_style = if focused {
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(self.field_label(*id), label_style))),
                Rect::new(body.x, y, body.width, 1),
            );

            let (value, placeholder) = self.field_display(*id);
            let value_line = if value.is_empty() {
                Line::from(Span::styled(placeholder, Style::default().fg(theme.muted)))
            } else {
                let mut spans = vec![Span::styled(value, Style::default().fg(theme.text))];
                if focused && *id != FieldId::Society {
                    spans.push(Span::styled("▏", Style::default().fg(theme.primary)));
                }
                Line::from(spans)
            };
            frame.render_widget(
                Paragraph::new(value_line),
                Rect::new(body.x + 2, y + 1, body.width.saturating_sub(2), 1),
            );
            y += 2;
        }

        if let Some(error) = &self.error
            && y + 1 < body.y + body.height
        {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    error.clone(),
                    Style::default().fg(theme.error),
                ))),
                Rect::new(body.x, y + 1, body.width, 1),
            );
        }

        let hints = [
            InputHint::new("Enter", "sign in"),
            InputHint::new("Tab", "next field"),
            InputHint::new("Esc", "cancel"),
        ];
        render_hints(frame, body, &hints, theme.muted);
    }

    fn field_label(&self, id: FieldId) -> &'static str {
        match id {
            FieldId::Email => "Email",
            FieldId::Serial => "Faculty Serial Number",
            FieldId::Society => "Society Name",
            FieldId::Hierarchy => "Hierarchy / Position",
            FieldId::Password => "Password",
        }
    }

    fn field_display(&self, id: FieldId) -> (String, &'static str) {
        match id {
            FieldId::Email => (self.email.clone(), "you@college.edu"),
            FieldId::Serial => (self.serial.clone(), "Enter your serial number"),
            FieldId::Society => (
                self.society.map(|i| format!("‹ {} ›", SOCIETIES[i])).unwrap_or_default(),
                "Select your society (Left/Right)",
            ),
            FieldId::Hierarchy => (self.hierarchy.clone(), "e.g., President, Vice President"),
            FieldId::Password => ("•".repeat(self.password.chars().count()), "Enter your password"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(login: &mut LoginState, text: &str) {
        for c in text.chars() {
            login.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn session_from(update: OverlayUpdate) -> Session {
        match update.transition {
            OverlayTransition::Complete(session) => session,
            other => panic!("expected completed login, got {other:?}"),
        }
    }

    #[test]
    fn test_student_login_requires_email_and_password() {
        let mut login = LoginState::open(Role::Student);
        let update = login.handle_key(key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert_eq!(
            login.error.as_deref(),
            Some("Please fill in all required fields")
        );
    }

    #[test]
    fn test_student_login_succeeds_with_both_fields() {
        let mut login = LoginState::open(Role::Student);
        type_text(&mut login, "jane@college.edu");
        login.handle_key(key(KeyCode::Tab));
        type_text(&mut login, "hunter2");

        let session = session_from(login.handle_key(key(KeyCode::Enter)));
        assert_eq!(session.role, Role::Student);
        assert_eq!(session.email, "jane@college.edu");
        assert_eq!(session.detail, None);
    }

    #[test]
    fn test_faculty_login_requires_serial_number() {
        let mut login = LoginState::open(Role::Faculty);
        type_text(&mut login, "prof@college.edu");
        login.handle_key(key(KeyCode::Tab));
        login.handle_key(key(KeyCode::Tab));
        type_text(&mut login, "secret");

        let update = login.handle_key(key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert_eq!(
            login.error.as_deref(),
            Some("Faculty serial number is required")
        );
    }

    #[test]
    fn test_faculty_serial_lands_in_session_detail() {
        let mut login = LoginState::open(Role::Faculty);
        type_text(&mut login, "prof@college.edu");
        login.handle_key(key(KeyCode::Tab));
        type_text(&mut login, "FAC-042");
        login.handle_key(key(KeyCode::Tab));
        type_text(&mut login, "secret");

        let session = session_from(login.handle_key(key(KeyCode::Enter)));
        assert_eq!(session.role, Role::Faculty);
        assert_eq!(session.detail.as_deref(), Some("FAC-042"));
    }

    #[test]
    fn test_club_login_requires_society_and_hierarchy() {
        let mut login = LoginState::open(Role::Club);
        type_text(&mut login, "alice@college.edu");
        login.handle_key(key(KeyCode::Tab)); // society, left unset
        login.handle_key(key(KeyCode::Tab)); // hierarchy, left empty
        login.handle_key(key(KeyCode::Tab));
        type_text(&mut login, "pw");

        let update = login.handle_key(key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert_eq!(
            login.error.as_deref(),
            Some("Society name and hierarchy are required")
        );
    }

    #[test]
    fn test_club_login_combines_society_and_position() {
        let mut login = LoginState::open(Role::Club);
        type_text(&mut login, "alice@college.edu");
        login.handle_key(key(KeyCode::Tab));
        login.handle_key(key(KeyCode::Right)); // Robotics Club
        login.handle_key(key(KeyCode::Tab));
        type_text(&mut login, "President");
        login.handle_key(key(KeyCode::Tab));
        type_text(&mut login, "pw");

        let session = session_from(login.handle_key(key(KeyCode::Enter)));
        assert_eq!(session.role, Role::Club);
        assert_eq!(session.detail.as_deref(), Some("Robotics Club / President"));
    }

    #[test]
    fn test_society_selector_cycles_both_directions() {
        let mut login = LoginState::open(Role::Club);
        login.handle_key(key(KeyCode::Tab)); // focus society
        login.handle_key(key(KeyCode::Left));
        assert_eq!(login.society, Some(SOCIETIES.len() - 1));
        login.handle_key(key(KeyCode::Right));
        assert_eq!(login.society, Some(0));
    }

    #[test]
    fn test_escape_closes_without_session() {
        let mut login = LoginState::open(Role::Student);
        let update = login.handle_key(key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
    }

    #[test]
    fn test_error_clears_on_next_edit() {
        let mut login = LoginState::open(Role::Student);
        login.handle_key(key(KeyCode::Enter));
        assert!(login.error.is_some());
        login.handle_key(key(KeyCode::Char('a')));
        assert!(login.error.is_none());
    }
}
