// Keyboard and mouse event handling
//
// This module routes terminal input to the application state: map
// shortcuts, enquiry form editing, and pointer movement over the map.

use super::{AppState, InputMode};
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings (map)
/// - `q`, `Q`, `Esc` - Quit the application
/// - `+`, `=` - Faster ticks (shorter interval)
/// - `-`, `_` - Slower ticks (longer interval)
/// - `a`, `A` - Toggle animations
/// - `t`, `T` - Toggle port labels
/// - `c`, `C` - Toggle ship cursor
/// - `e`, `E` - Focus the enquiry form
///
/// # Key Bindings (enquiry form)
/// - `Tab`, `Down` - Next field
/// - `BackTab`, `Up` - Previous field
/// - `Enter` - Submit
/// - `Backspace` - Delete last character
/// - `Esc` - Back to the map
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    app.request_redraw();
    match app.input_mode {
        InputMode::Map => handle_map_key(app, key),
        InputMode::Enquiry => {
            handle_enquiry_key(app, key);
            true
        }
    }
}

fn handle_map_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.shutdown();
            false
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.increase_tick_rate();
            true
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.decrease_tick_rate();
            true
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.map_settings.animations_enabled = !app.map_settings.animations_enabled;
            // Give full animation complexity another try
            app.reset_animation_reduction();
            true
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.map_settings.labels_enabled = !app.map_settings.labels_enabled;
            true
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.map_settings.cursor_enabled = !app.map_settings.cursor_enabled;
            true
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.focus_enquiry();
            true
        }
        _ => true,
    }
}

fn handle_enquiry_key(app: &mut AppState, key: KeyCode) {
    match key {
        KeyCode::Esc => app.leave_enquiry(),
        KeyCode::Tab | KeyCode::Down => app.enquiry.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.enquiry.focus_previous(),
        KeyCode::Enter => app.submit_enquiry(Instant::now()),
        KeyCode::Backspace => app.enquiry.backspace(),
        KeyCode::Char(c) => app.enquiry.insert_char(c),
        _ => {}
    }
}

/// Handle mouse events; only pointer movement matters to the map
pub fn handle_mouse_event(app: &mut AppState, event: MouseEvent) {
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
            app.pointer_moved(event.column, event.row);
        }
        _ => {}
    }
}
