//! Central `AppState` container.

use std::sync::Arc;

use ratatui::widgets::ListState;

use crate::catalog::{Catalog, Company, Product};
use crate::logic::controller::{CatalogController, DEFAULT_SEARCH_DEBOUNCE};
use crate::state::modal::Modal;
use crate::state::types::{Focus, HitRect};
use crate::state::view::ViewState;
use crate::theme::{KeyMap, Settings};

/// Global application state shared by the event and UI layers.
///
/// The catalog view itself lives in [`CatalogController`]; everything else
/// here is terminal-facing: the raw input text, the list selection, and the
/// rectangles recorded during rendering for mouse hit-testing.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    /// Catalog, view state, debouncer and visible list.
    pub controller: CatalogController,
    /// Current search input text (applied to the view after the quiet window).
    pub input: String,
    /// Index into the visible list that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,
    /// Which pane is currently focused.
    pub focus: Focus,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Whether the details pane is drawn.
    pub show_details: bool,
    /// Details pane width in percent.
    pub details_pct: u16,
    /// Whether the key hint footer is drawn.
    pub show_keybinds_footer: bool,

    // Mouse hit-test rectangles (x, y, w, h), refreshed on every frame
    /// Search input box.
    pub search_rect: Option<HitRect>,
    /// Inner area of the results list (rows only, no border).
    pub results_rect: Option<HitRect>,
    /// Manufacturer toggle buttons, indexed like [`Company::ALL`].
    pub company_rects: [Option<HitRect>; Company::COUNT],
    /// Sort buttons: kcal, sugar.
    pub sort_rects: [Option<HitRect>; 2],
    /// Case sensitivity toggle.
    pub case_rect: Option<HitRect>,
    /// Number of result rows visible in the last frame.
    pub results_page_rows: usize,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl AppState {
    /// What: Build application state around a controller using user settings.
    ///
    /// Inputs:
    /// - `controller`: Catalog controller with the initial view state
    /// - `settings`: Parsed settings (layout and key bindings)
    ///
    /// Output:
    /// - Fresh state with the first visible product selected.
    #[must_use]
    pub fn new(controller: CatalogController, settings: &Settings) -> Self {
        let input = controller.view().search_term.clone();
        let mut list_state = ListState::default();
        if !controller.visible().is_empty() {
            list_state.select(Some(0));
        }
        Self {
            controller,
            input,
            selected: 0,
            list_state,
            focus: Focus::default(),
            modal: Modal::default(),
            keymap: settings.keymap.clone(),
            show_details: settings.show_details_pane,
            details_pct: settings.details_pane_pct,
            show_keybinds_footer: settings.show_keybinds_footer,
            search_rect: None,
            results_rect: None,
            company_rects: [None; Company::COUNT],
            sort_rects: [None; 2],
            case_rect: None,
            results_page_rows: 10,
            should_quit: false,
        }
    }

    /// The product under the selection cursor, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        if self.list_state.selected().is_none() {
            return None;
        }
        self.controller.visible().get(self.selected)
    }
}

impl Default for AppState {
    /// Bundled catalog, default view and default settings.
    fn default() -> Self {
        let controller = CatalogController::new(
            Arc::new(Catalog::bundled()),
            ViewState::default(),
            DEFAULT_SEARCH_DEBOUNCE,
        );
        Self::new(controller, &Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Default state selects the first visible product
    ///
    /// - Input: `AppState::default()`
    /// - Output: Row 0 selected; empty input; search focus
    fn default_selects_first_row() {
        let app = AppState::default();
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(
            app.selected_product().map(|p| p.title.as_str()),
            app.controller.visible().first().map(|p| p.title.as_str())
        );
        assert!(app.input.is_empty());
        assert_eq!(app.focus, Focus::Search);
    }

    #[test]
    /// What: Settings flow into layout flags and key map
    ///
    /// - Input: Settings with details pane off and 50% width
    /// - Output: AppState mirrors them
    fn settings_flow_into_state() {
        let settings = Settings {
            show_details_pane: false,
            details_pane_pct: 50,
            ..Settings::default()
        };
        let controller = CatalogController::new(
            Arc::new(Catalog::bundled()),
            ViewState::default(),
            DEFAULT_SEARCH_DEBOUNCE,
        );
        let app = AppState::new(controller, &settings);
        assert!(!app.show_details);
        assert_eq!(app.details_pct, 50);
        assert_eq!(app.keymap, settings.keymap);
    }
}
