//! Login session context.
//!
//! A `Session` is produced by the login form and passed explicitly into the
//! dashboard that consumes it. There is no ambient session state: logging
//! out drops the value and returns to the landing screen.

/// The portal role a user logs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Faculty,
    Club,
}

impl Role {
    /// All roles, in the order the landing screen lists them.
    pub fn all() -> &'static [Role] {
        &[Role::Student, Role::Faculty, Role::Club]
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student Login",
            Role::Faculty => "Faculty Login",
            Role::Club => "Club / Society Login",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Role::Student => "Access your dashboard",
            Role::Faculty => "Manage your classes",
            Role::Club => "Manage your society",
        }
    }

    pub fn dashboard_title(self) -> &'static str {
        match self {
            Role::Student => "Student Dashboard",
            Role::Faculty => "Faculty Dashboard",
            Role::Club => "Club Dashboard",
        }
    }
}

/// Authenticated-session context handed to a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub email: String,
    /// Role-specific detail: faculty serial number, or club society/position.
    pub detail: Option<String>,
}

impl Session {
    pub fn new(role: Role, email: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            role,
            email: email.into(),
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_listed_in_display_order() {
        assert_eq!(Role::all(), &[Role::Student, Role::Faculty, Role::Club]);
    }

    #[test]
    fn test_session_carries_role_specific_detail() {
        let session = Session::new(
            Role::Club,
            "alice@college.edu",
            Some("Robotics Club / President".to_string()),
        );
        assert_eq!(session.role, Role::Club);
        assert_eq!(session.detail.as_deref(), Some("Robotics Club / President"));
    }
}
