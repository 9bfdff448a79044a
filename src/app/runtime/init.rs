use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::logic::controller::CatalogController;
use crate::state::{AppState, ViewState};
use crate::theme::Settings;

/// What: Build the application state for a TUI session.
///
/// Inputs:
/// - `catalog`: Loaded catalog
/// - `view`: Initial view state (settings merged with command line overrides)
/// - `settings`: Parsed settings (debounce window, layout, key map)
///
/// Output:
/// - Ready-to-render `AppState` with the first row selected.
#[must_use]
pub fn initialize_app_state(catalog: Catalog, view: ViewState, settings: &Settings) -> AppState {
    let delay = Duration::from_millis(settings.search_debounce_ms);
    tracing::info!(
        products = catalog.len(),
        debounce_ms = settings.search_debounce_ms,
        "initializing app state"
    );
    let controller = CatalogController::new(Arc::new(catalog), view, delay);
    AppState::new(controller, settings)
}
