use crate::ui::app::App;
use crate::ui::view::IdDirection;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if let Some(direction) = direction_for(key) {
        app.request_id_change(direction);
        return;
    }

    if matches!(key.code, KeyCode::Enter) {
        app.retry();
    }
}

/// Id buttons: random, up, down.
pub fn direction_for(key: KeyEvent) -> Option<IdDirection> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char(' ') => {
            Some(IdDirection::random(&mut rand::thread_rng()))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => Some(IdDirection::Increment),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => Some(IdDirection::Decrement),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
