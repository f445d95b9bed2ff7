//! Input adapters for the carousel.
//!
//! Each adapter translates one raw input channel into a [`NavIntent`] or
//! a [`CarouselAction`]; none of them mutates the cursor directly. The
//! keyboard adapter is screen-global while the wheel and click adapters
//! only respond inside rectangles recorded during the last render pass.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::state::LandingState;

use super::NavIntent;

/// Width in columns of a single indicator slot as drawn by the renderer.
pub(crate) const INDICATOR_SLOT_WIDTH: u16 = 3;

/// An action the reducer should take in response to carousel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Nav(NavIntent),
    OpenRegistration,
}

/// Maps a key press to a navigation intent.
///
/// Arrow keys work anywhere on the landing screen, no focus required.
pub fn key_intent(key: &KeyEvent) -> Option<NavIntent> {
    match key.code {
        KeyCode::Left => Some(NavIntent::Previous),
        KeyCode::Right => Some(NavIntent::Next),
        _ => None,
    }
}

/// Maps a mouse event to a carousel action using the hit rectangles the
/// renderer recorded on `landing`.
///
/// Wheel input is surface-scoped: scrolling outside the carousel panel is
/// ignored rather than hijacked. Clicks are resolved innermost-first so the
/// register button and indicator strip win over the surrounding panel.
pub fn mouse_action(landing: &LandingState, mouse: &MouseEvent) -> Option<CarouselAction> {
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollDown if landing.surface.get().contains((col, row).into()) => {
            Some(CarouselAction::Nav(NavIntent::Next))
        }
        MouseEventKind::ScrollUp if landing.surface.get().contains((col, row).into()) => {
            Some(CarouselAction::Nav(NavIntent::Previous))
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let pos = (col, row).into();
            if landing.register.get().contains(pos) {
                Some(CarouselAction::OpenRegistration)
            } else if landing.prev_arrow.get().contains(pos) {
                Some(CarouselAction::Nav(NavIntent::Previous))
            } else if landing.next_arrow.get().contains(pos) {
                Some(CarouselAction::Nav(NavIntent::Next))
            } else if landing.indicators.get().contains(pos) {
                let strip = landing.indicators.get();
                let slot = (col - strip.x) / INDICATOR_SLOT_WIDTH;
                let target = usize::from(slot);
                if target < landing.carousel.len() {
                    Some(CarouselAction::Nav(NavIntent::JumpTo(target)))
                } else {
                    None
                }
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn landing_with_rects() -> LandingState {
        let landing = LandingState::new().unwrap();
        landing.surface.set(Rect::new(10, 5, 40, 12));
        landing.prev_arrow.set(Rect::new(10, 10, 3, 3));
        landing.next_arrow.set(Rect::new(47, 10, 3, 3));
        landing.register.set(Rect::new(25, 13, 12, 1));
        landing.indicators.set(Rect::new(15, 16, 30, 1));
        landing
    }

    #[test]
    fn test_arrow_keys_map_to_intents() {
        assert_eq!(key_intent(&key(KeyCode::Left)), Some(NavIntent::Previous));
        assert_eq!(key_intent(&key(KeyCode::Right)), Some(NavIntent::Next));
        assert_eq!(key_intent(&key(KeyCode::Up)), None);
        assert_eq!(key_intent(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_wheel_inside_surface_navigates() {
        let landing = landing_with_rects();
        assert_eq!(
            mouse_action(&landing, &mouse(MouseEventKind::ScrollDown, 20, 8)),
            Some(CarouselAction::Nav(NavIntent::Next))
        );
        assert_eq!(
            mouse_action(&landing, &mouse(MouseEventKind::ScrollUp, 20, 8)),
            Some(CarouselAction::Nav(NavIntent::Previous))
        );
    }

    #[test]
    fn test_wheel_outside_surface_is_ignored() {
        let landing = landing_with_rects();
        assert_eq!(
            mouse_action(&landing, &mouse(MouseEventKind::ScrollDown, 2, 2)),
            None
        );
        assert_eq!(
            mouse_action(&landing, &mouse(MouseEventKind::ScrollUp, 60, 30)),
            None
        );
    }

    #[test]
    fn test_arrow_clicks_navigate() {
        let landing = landing_with_rects();
        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(
            mouse_action(&landing, &mouse(down, 11, 11)),
            Some(CarouselAction::Nav(NavIntent::Previous))
        );
        assert_eq!(
            mouse_action(&landing, &mouse(down, 48, 11)),
            Some(CarouselAction::Nav(NavIntent::Next))
        );
    }

    #[test]
    fn test_register_click_opens_registration() {
        let landing = landing_with_rects();
        assert_eq!(
            mouse_action(&landing, &mouse(MouseEventKind::Down(MouseButton::Left), 26, 13)),
            Some(CarouselAction::OpenRegistration)
        );
    }

    #[test]
    fn test_indicator_click_jumps_to_slot() {
        let landing = landing_with_rects();
        let down = MouseEventKind::Down(MouseButton::Left);
        // strip starts at x = 15, each slot is 3 columns wide
        assert_eq!(
            mouse_action(&landing, &mouse(down, 15, 16)),
            Some(CarouselAction::Nav(NavIntent::JumpTo(0)))
        );
        assert_eq!(
            mouse_action(&landing, &mouse(down, 21, 16)),
            Some(CarouselAction::Nav(NavIntent::JumpTo(2)))
        );
        assert_eq!(
            mouse_action(&landing, &mouse(down, 44, 16)),
            Some(CarouselAction::Nav(NavIntent::JumpTo(9)))
        );
    }

    #[test]
    fn test_click_outside_every_control_does_nothing() {
        let landing = landing_with_rects();
        assert_eq!(
            mouse_action(&landing, &mouse(MouseEventKind::Down(MouseButton::Left), 0, 0)),
            None
        );
    }

    #[test]
    fn test_right_button_and_drag_are_ignored() {
        let landing = landing_with_rects();
        assert_eq!(
            mouse_action(&landing, &mouse(MouseEventKind::Down(MouseButton::Right), 26, 13)),
            None
        );
        assert_eq!(
            mouse_action(&landing, &mouse(MouseEventKind::Moved, 26, 13)),
            None
        );
    }
}
