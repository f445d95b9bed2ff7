//! Color themes for the portal.
//!
//! Render functions take a `Theme` reference instead of naming colors
//! directly, so the Ctrl+T toggle repaints everything consistently.

use beacon_core::config::ThemeChoice;
use ratatui::style::Color;

/// Resolved color palette for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub choice: ThemeChoice,
    /// Headline and brand color.
    pub primary: Color,
    /// Secondary emphasis (faculty accents, schedule rows).
    pub secondary: Color,
    /// Tertiary emphasis (club accents, badges).
    pub accent: Color,
    /// Body text.
    pub text: Color,
    /// De-emphasized text (hints, placeholders, inactive indicators).
    pub muted: Color,
    /// Text drawn on top of a `primary`-filled surface.
    pub on_primary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self {
                choice,
                primary: Color::Cyan,
                secondary: Color::Magenta,
                accent: Color::Yellow,
                text: Color::White,
                muted: Color::DarkGray,
                on_primary: Color::Black,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
            ThemeChoice::Light => Self {
                choice,
                primary: Color::Blue,
                secondary: Color::Magenta,
                accent: Color::LightRed,
                text: Color::Black,
                muted: Color::Gray,
                on_primary: Color::White,
                success: Color::Green,
                warning: Color::LightRed,
                error: Color::Red,
            },
        }
    }

    pub fn toggled(self) -> Self {
        Self::from_choice(self.choice.toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_choice_both_ways() {
        let dark = Theme::from_choice(ThemeChoice::Dark);
        assert_eq!(dark.toggled().choice, ThemeChoice::Light);
        assert_eq!(dark.toggled().toggled().choice, ThemeChoice::Dark);
    }
}
