use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// A fetch was started; the caller must spawn the request.
    Fetch,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.request_quit();
            InputAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') | KeyCode::Char('G') => {
            if app.begin_fetch() {
                InputAction::Fetch
            } else {
                InputAction::None
            }
        }
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') | KeyCode::Char('B') => {
            app.go_back();
            InputAction::None
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.share();
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
