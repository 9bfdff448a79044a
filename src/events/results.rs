//! Key handling while the result list has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::search;
use crate::logic::selection::{move_selection, select_index};
use crate::state::{AppState, Focus};

/// What: Handle a key while the results list has focus.
///
/// Details:
/// - `j`/`k` move, `g`/`G` and Home/End jump to the ends, Enter opens the shop link.
/// - Esc returns to the search box; so does any other printable character,
///   which is typed into it.
pub fn handle_results_key(ke: &KeyEvent, app: &mut AppState) {
    let plain = !ke
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
    match ke.code {
        KeyCode::Char('j') if plain => move_selection(app, 1),
        KeyCode::Char('k') if plain => move_selection(app, -1),
        KeyCode::Char('g') | KeyCode::Home if plain => select_index(app, 0),
        KeyCode::Char('G') | KeyCode::End if plain => {
            let len = app.controller.visible().len();
            if len > 0 {
                select_index(app, len - 1);
            }
        }
        KeyCode::Enter => super::global::open_selected_link(app),
        KeyCode::Esc => app.focus = Focus::Search,
        KeyCode::Char(ch) if plain => {
            app.focus = Focus::Search;
            app.input.push(ch);
            search::input_changed(app);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    /// What: Vim-style keys move the selection
    ///
    /// - Input: j, j, k, G, g
    /// - Output: 2, 1, last, 0
    fn vim_navigation() {
        let mut app = AppState::default();
        app.focus = Focus::Results;
        handle_results_key(&key(KeyCode::Char('j')), &mut app);
        handle_results_key(&key(KeyCode::Char('j')), &mut app);
        assert_eq!(app.selected, 2);
        handle_results_key(&key(KeyCode::Char('k')), &mut app);
        assert_eq!(app.selected, 1);
        handle_results_key(
            &KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            &mut app,
        );
        assert_eq!(app.selected, app.controller.visible().len() - 1);
        handle_results_key(&key(KeyCode::Char('g')), &mut app);
        assert_eq!(app.selected, 0);
    }

    #[test]
    /// What: Other printable keys jump back into the search box
    ///
    /// - Input: 'x' while results are focused
    /// - Output: Focus on search, input "x", search pending
    fn typing_returns_to_search() {
        let mut app = AppState::default();
        app.focus = Focus::Results;
        handle_results_key(&key(KeyCode::Char('x')), &mut app);
        assert_eq!(app.focus, Focus::Search);
        assert_eq!(app.input, "x");
        assert_eq!(app.controller.pending_search(), Some("x"));
    }
}
