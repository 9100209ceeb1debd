//! Keyboard dispatch for the board UI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::board::ports::BoardGateway;

use super::app::{BoardApp, Mode, TaskForm};

/// Dispatches one key press against the current input mode.
pub(crate) fn handle_key<G: BoardGateway>(app: &mut BoardApp<G>, key: KeyEvent) {
    match app.mode {
        Mode::Browse => handle_browse_key(app, key),
        Mode::AddTask(_) => handle_form_key(app, key),
        Mode::ConfirmQuit => handle_confirm_key(app, key),
    }
}

fn handle_browse_key<G: BoardGateway>(app: &mut BoardApp<G>, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
            app.mode = Mode::AddTask(TaskForm::default());
        }
        (KeyModifiers::CONTROL, KeyCode::Char('b')) => app.delete_selected(),
        (_, KeyCode::Char('d')) => app.move_selected_forward(),
        (_, KeyCode::Char('a')) => app.move_selected_backward(),
        (_, KeyCode::Left | KeyCode::Char('h')) => app.focus_previous_column(),
        (_, KeyCode::Right | KeyCode::Char('l')) => app.focus_next_column(),
        (_, KeyCode::Up | KeyCode::Char('k')) => app.select_previous(),
        (_, KeyCode::Down | KeyCode::Char('j')) => app.select_next(),
        (_, KeyCode::Esc) => app.mode = Mode::ConfirmQuit,
        _ => {}
    }
}

fn handle_form_key<G: BoardGateway>(app: &mut BoardApp<G>, key: KeyEvent) {
    let Mode::AddTask(form) = &mut app.mode else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.mode = Mode::Browse,
        KeyCode::Enter => {
            if let Mode::AddTask(submitted) = std::mem::replace(&mut app.mode, Mode::Browse) {
                app.submit_form(submitted);
            }
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_field(),
        KeyCode::Backspace => {
            form.active_buffer_mut().pop();
        }
        KeyCode::Char(c) => form.active_buffer_mut().push(c),
        _ => {}
    }
}

fn handle_confirm_key<G: BoardGateway>(app: &mut BoardApp<G>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => app.request_quit(),
        KeyCode::Esc | KeyCode::Char('n') => app.mode = Mode::Browse,
        _ => {}
    }
}
