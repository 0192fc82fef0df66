use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc => app.escape(),
        KeyCode::Char('m') => app.open_menu(),
        KeyCode::Char('r') => app.reload_config(),
        KeyCode::Up | KeyCode::Left | KeyCode::BackTab => app.move_focus(-1),
        KeyCode::Down | KeyCode::Right | KeyCode::Tab => app.move_focus(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, target: char) -> bool {
    match key.code {
        KeyCode::Char(c) => {
            key.modifiers.contains(KeyModifiers::CONTROL) && c.eq_ignore_ascii_case(&target)
        }
        _ => false,
    }
}
