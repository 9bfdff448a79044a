//! Event handling layer (modularized).
//!
//! `handle_event` routes key presses through the open modal, the global key
//! map, and finally the focused pane; mouse events go to hit-testing.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::state::{AppState, Focus};

mod global;
mod modals;
mod mouse;
mod results;
mod search;
mod utils;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if modals::handle_modal_key(ke, app) {
                return false;
            }
            if !global::handle_global_key(ke, app) {
                match app.focus {
                    Focus::Search => search::handle_search_key(ke, app),
                    Focus::Results => results::handle_results_key(ke, app),
                }
            }
        }
        CEvent::Mouse(m) => {
            if matches!(app.modal, crate::state::Modal::None) {
                mouse::handle_mouse_event(m, app);
            }
        }
        _ => {}
    }
    app.should_quit
}
