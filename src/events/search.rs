//! Search input editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::utils::matches_any;
use crate::logic::selection::apply_view_change;
use crate::state::{AppState, Focus};

/// Hand the current input to the controller's debouncer.
pub(super) fn input_changed(app: &mut AppState) {
    app.controller.set_search_term(app.input.clone());
}

/// What: Handle a key while the search input has focus.
///
/// Inputs:
/// - `ke`: Key event (press)
/// - `app`: Mutable application state
///
/// Details:
/// - Printable characters and Backspace edit the input and re-arm the debounce.
/// - The apply binding (Enter) flushes the pending term right away.
/// - Esc moves focus to the results.
pub fn handle_search_key(ke: &KeyEvent, app: &mut AppState) {
    if matches_any(ke, &app.keymap.apply_search) {
        apply_view_change(app, |c| c.flush_search());
        return;
    }
    if matches_any(ke, &app.keymap.clear_search) {
        if !app.input.is_empty() {
            app.input.clear();
            input_changed(app);
        }
        return;
    }
    match ke.code {
        KeyCode::Esc => app.focus = Focus::Results,
        KeyCode::Backspace => {
            if app.input.pop().is_some() {
                input_changed(app);
            }
        }
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            app.input.push(ch);
            input_changed(app);
        }
        _ => {}
    }
}
