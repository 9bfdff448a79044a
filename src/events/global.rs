//! Key bindings that work regardless of focus.

use crossterm::event::KeyEvent;

use super::utils::matches_any;
use crate::catalog::Company;
use crate::logic::selection::{apply_view_change, move_selection};
use crate::state::{AppState, Focus, Modal, SortField};
use crate::theme::reload_theme;

/// Open the shop search page for the selected product, if any.
pub(super) fn open_selected_link(app: &AppState) {
    if let Some(p) = app.selected_product() {
        crate::util::open_url(&p.shop_url());
    }
}

/// Number of rows moved by the page bindings.
fn page_rows(app: &AppState) -> isize {
    isize::try_from(app.results_page_rows.max(1)).unwrap_or(1)
}

/// What: Handle key chords bound in the global key map.
///
/// Inputs:
/// - `ke`: Key event (press)
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the key matched a global binding and was consumed.
///
/// Details:
/// - The exit binding sets `app.should_quit`.
/// - A failed theme reload opens an alert with the diagnostics.
pub fn handle_global_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    let km = &app.keymap;
    if matches_any(ke, &km.exit) {
        app.should_quit = true;
        return true;
    }
    if matches_any(ke, &km.help_overlay) {
        app.modal = Modal::Help;
        return true;
    }
    if matches_any(ke, &km.reload_theme) {
        if let Err(msg) = reload_theme() {
            app.modal = Modal::Alert { message: msg };
        }
        return true;
    }
    if matches_any(ke, &km.focus_next) {
        app.focus = match app.focus {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Search,
        };
        return true;
    }
    if matches_any(ke, &km.sort_kcal) {
        apply_view_change(app, |c| c.set_sort(SortField::Kcal));
        return true;
    }
    if matches_any(ke, &km.sort_sugar) {
        apply_view_change(app, |c| c.set_sort(SortField::Sugar));
        return true;
    }
    if matches_any(ke, &km.toggle_case) {
        apply_view_change(app, |c| c.toggle_case_sensitive());
        return true;
    }
    if matches_any(ke, &km.clear_filters) {
        app.input.clear();
        apply_view_change(app, |c| c.clear_filters());
        return true;
    }
    if let Some(company) = Company::ALL
        .into_iter()
        .find(|c| matches_any(ke, &km.company_toggles[c.index()]))
    {
        apply_view_change(app, |c| c.toggle_company(company));
        return true;
    }
    if matches_any(ke, &km.open_link) {
        open_selected_link(app);
        return true;
    }
    let delta = if matches_any(ke, &km.move_up) {
        -1
    } else if matches_any(ke, &km.move_down) {
        1
    } else if matches_any(ke, &km.page_up) {
        -page_rows(app)
    } else if matches_any(ke, &km.page_down) {
        page_rows(app)
    } else {
        return false;
    };
    move_selection(app, delta);
    true
}
