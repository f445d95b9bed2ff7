//! Dashboard selection state and per-role menus.

use std::cell::Cell;

use beacon_core::session::{Role, Session};
use ratatui::layout::Rect;

/// A sidebar menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDef {
    pub id: &'static str,
    pub label: &'static str,
}

const fn section(id: &'static str, label: &'static str) -> SectionDef {
    SectionDef { id, label }
}

const STUDENT_SECTIONS: &[SectionDef] = &[
    section("pinboard", "Announcements"),
    section("timetable", "Timetable"),
    section("attendance", "Attendance"),
    section("complaints", "Complaints"),
    section("archive", "Event Archive"),
    section("calendar", "Events Calendar"),
    section("feedback", "Club Feedback"),
    section("assignments", "Assignments"),
];

const FACULTY_SECTIONS: &[SectionDef] = &[
    section("attendance", "Mark Attendance"),
    section("timetable", "Timetable"),
    section("assignments", "Assign Work"),
    section("tests", "Test Schedules"),
    section("announcements", "Announcements"),
];

const CLUB_SECTIONS: &[SectionDef] = &[
    section("members", "Manage Members"),
    section("events", "Event Management"),
    section("certificates", "Certificates"),
    section("announcements", "Announcements"),
    section("social", "Social Media"),
];

/// The sidebar menu for a role. Never empty.
pub fn sections_for(role: Role) -> &'static [SectionDef] {
    match role {
        Role::Student => STUDENT_SECTIONS,
        Role::Faculty => FACULTY_SECTIONS,
        Role::Club => CLUB_SECTIONS,
    }
}

/// State for the dashboard screen of the signed-in role.
#[derive(Debug)]
pub struct DashboardState {
    pub session: Session,
    selected: usize,
    /// Sidebar menu rows as drawn by the last render, for click routing.
    pub menu: Cell<Rect>,
}

impl DashboardState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            selected: 0,
            menu: Cell::new(Rect::default()),
        }
    }

    pub fn sections(&self) -> &'static [SectionDef] {
        sections_for(self.session.role)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> SectionDef {
        self.sections()[self.selected]
    }

    /// Moves the menu selection down, stopping at the last entry.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.sections().len() {
            self.selected += 1;
        }
    }

    /// Moves the menu selection up, stopping at the first entry.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Selects a menu entry directly, ignoring out-of-range indexes.
    pub fn select(&mut self, index: usize) {
        if index < self.sections().len() {
            self.selected = index;
        }
    }

    /// Resolves a click at `(column, row)` to a menu entry using the rect
    /// recorded during the last render. One row per entry.
    pub fn menu_hit(&self, column: u16, row: u16) -> Option<usize> {
        let menu = self.menu.get();
        if !menu.contains((column, row).into()) {
            return None;
        }
        let index = usize::from(row - menu.y);
        (index < self.sections().len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_dash() -> DashboardState {
        DashboardState::new(Session::new(
            Role::Student,
            "jane@college.edu".to_string(),
            None,
        ))
    }

    #[test]
    fn test_each_role_has_its_own_menu() {
        assert_eq!(sections_for(Role::Student).len(), 8);
        assert_eq!(sections_for(Role::Faculty).len(), 5);
        assert_eq!(sections_for(Role::Club).len(), 5);
        assert_eq!(sections_for(Role::Student)[0].id, "pinboard");
        assert_eq!(sections_for(Role::Faculty)[0].id, "attendance");
        assert_eq!(sections_for(Role::Club)[0].id, "members");
    }

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut dash = student_dash();
        dash.select_previous();
        assert_eq!(dash.selected(), 0);

        for _ in 0..20 {
            dash.select_next();
        }
        assert_eq!(dash.selected(), dash.sections().len() - 1);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut dash = student_dash();
        dash.select(3);
        assert_eq!(dash.selected(), 3);
        dash.select(99);
        assert_eq!(dash.selected(), 3);
    }

    #[test]
    fn test_menu_hit_maps_rows_to_entries() {
        let dash = student_dash();
        dash.menu.set(Rect::new(2, 5, 20, 8));
        assert_eq!(dash.menu_hit(4, 5), Some(0));
        assert_eq!(dash.menu_hit(4, 9), Some(4));
        assert_eq!(dash.menu_hit(4, 4), None);
        assert_eq!(dash.menu_hit(30, 6), None);
    }
}
