use crate::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

fn is_press_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('-')
    )
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, now: Instant) {
    if key.kind == KeyEventKind::Release {
        if is_press_key(key.code) {
            app.key_released(now);
        }
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        // Ctrl+C also quits
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        // Ctrl+U: clear focused field
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear_field(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Left | KeyCode::Char('h') => app.focus_left(),
        KeyCode::Right | KeyCode::Char('l') => app.focus_right(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_up(),
        KeyCode::Down | KeyCode::Char('j') => app.focus_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.activate_focused(now),
        KeyCode::Char('+') | KeyCode::Char('=') => app.step_focused(true, now),
        KeyCode::Char('-') => app.step_focused(false, now),
        KeyCode::Char(c) if c.is_ascii_digit() => app.type_digit(c),
        KeyCode::Backspace => app.field_backspace(),
        KeyCode::Delete => app.clear_field(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_to_initial(),
        _ => {}
    }
}

pub(super) fn handle_mouse(mouse: MouseEvent, app: &mut App, now: Instant) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.pointer_down(column, row, now),
        MouseEventKind::Up(MouseButton::Left) => app.pointer_up(now),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            app.pointer_moved(column, row, now)
        }
        MouseEventKind::ScrollUp => app.scroll(column, row, true),
        MouseEventKind::ScrollDown => app.scroll(column, row, false),
        _ => {}
    }
}
