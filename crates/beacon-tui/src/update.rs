//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Input events from every channel are
//! applied in arrival order by this single function, so two near-simultaneous
//! navigation inputs always produce two sequential cursor steps.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::carousel::{self, CarouselAction};
use crate::overlays::{LoginState, Overlay, OverlayTransition};
use crate::state::{AppState, Screen, ToastKind};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            tick_toast(app);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn tick_toast(app: &mut AppState) {
    if let Some(toast) = &mut app.toast {
        toast.remaining_ticks = toast.remaining_ticks.saturating_sub(1);
        if toast.remaining_ticks == 0 {
            app.toast = None;
            app.dirty = true;
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(_, _) => {
            app.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C quits from anywhere, including inside the login form
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if let Some(overlay) = &mut app.overlay {
        let update = overlay.handle_key(key);
        app.dirty = true;
        match update.transition {
            OverlayTransition::Stay => {}
            OverlayTransition::Close => app.overlay = None,
            OverlayTransition::Complete(session) => {
                app.overlay = None;
                app.enter_dashboard(session);
                app.show_toast(ToastKind::Success, "Login Successful");
            }
        }
        return update.effects;
    }

    if ctrl && key.code == KeyCode::Char('t') {
        app.theme = app.theme.toggled();
        app.dirty = true;
        return vec![UiEffect::PersistTheme {
            theme: app.theme.choice,
        }];
    }

    match &mut app.screen {
        Screen::Landing(landing) => {
            // Arrow keys drive the carousel from anywhere on this screen
            if let Some(intent) = carousel::key_intent(&key) {
                landing.carousel.apply(intent);
                app.dirty = true;
                return vec![];
            }
            match key.code {
                KeyCode::Char('q') => vec![UiEffect::Quit],
                KeyCode::Tab => {
                    landing.next_role();
                    app.dirty = true;
                    vec![]
                }
                KeyCode::BackTab => {
                    landing.previous_role();
                    app.dirty = true;
                    vec![]
                }
                KeyCode::Enter => {
                    app.overlay = Some(Overlay::Login(LoginState::open(landing.selected_role())));
                    app.dirty = true;
                    vec![]
                }
                _ => vec![],
            }
        }
        Screen::Dashboard(dash) => match key.code {
            KeyCode::Up => {
                dash.select_previous();
                app.dirty = true;
                vec![]
            }
            KeyCode::Down => {
                dash.select_next();
                app.dirty = true;
                vec![]
            }
            KeyCode::Esc => {
                app.logout();
                app.show_toast(ToastKind::Info, "Logged out");
                vec![]
            }
            _ => vec![],
        },
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    // The login form is keyboard-only; mouse input underneath it is dropped
    if app.overlay.is_some() {
        return vec![];
    }

    match &mut app.screen {
        Screen::Landing(landing) => {
            if let Some(action) = carousel::mouse_action(landing, &mouse) {
                app.dirty = true;
                return match action {
                    CarouselAction::Nav(intent) => {
                        landing.carousel.apply(intent);
                        vec![]
                    }
                    CarouselAction::OpenRegistration => {
                        let url = landing.carousel.current().registration_url.to_string();
                        app.show_toast(ToastKind::Info, "Opening registration page");
                        vec![UiEffect::OpenRegistration { url }]
                    }
                };
            }
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && let Some(index) = landing.role_card_hit(mouse.column, mouse.row)
            {
                landing.selected_role = index;
                app.overlay = Some(Overlay::Login(LoginState::open(landing.selected_role())));
                app.dirty = true;
            }
            vec![]
        }
        Screen::Dashboard(dash) => {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && let Some(index) = dash.menu_hit(mouse.column, mouse.row)
            {
                dash.select(index);
                app.dirty = true;
            }
            vec![]
        }
    }
}
