//! Key handling while a modal is open.

use crossterm::event::{KeyCode, KeyEvent};

use super::utils::matches_any;
use crate::state::{AppState, Modal};

/// What: Route a key press to the open modal.
///
/// Output:
/// - `true` when a modal was open and consumed the key; `false` otherwise.
///
/// Details:
/// - Help closes on Esc, Enter or its own binding; Alert on Esc or Enter.
pub fn handle_modal_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    match &app.modal {
        Modal::None => false,
        Modal::Help => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Enter)
                || matches_any(ke, &app.keymap.help_overlay)
            {
                app.modal = Modal::None;
            }
            true
        }
        Modal::Alert { .. } => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Enter) {
                app.modal = Modal::None;
            }
            true
        }
    }
}
