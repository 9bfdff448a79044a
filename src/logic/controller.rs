//! Catalog controller: owns the view state, the search debouncer and the
//! derived visible list.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{Catalog, Company, Product};
use crate::logic::debounce::{Clock, Debouncer, SystemClock};
use crate::logic::filter::compute_visible_list;
use crate::state::{SortField, ViewEvent, ViewState};

/// Quiet window applied to search input unless configured otherwise.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Drives a [`ViewState`] over a fixed [`Catalog`].
///
/// Every effective state change recomputes the visible list; search term
/// updates go through a trailing-edge debouncer and only take effect from
/// [`CatalogController::tick`] (or [`CatalogController::flush_search`]).
#[derive(Debug)]
pub struct CatalogController {
    /// Read-only product source.
    catalog: Arc<Catalog>,
    /// Current view state.
    view: ViewState,
    /// Derived list for `view`.
    visible: Vec<Product>,
    /// Pending search term.
    search: Debouncer<String>,
    /// Quiet window for search updates.
    search_delay: Duration,
}

impl CatalogController {
    /// Controller on the wall clock.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, view: ViewState, search_delay: Duration) -> Self {
        Self::with_clock(catalog, view, search_delay, Arc::new(SystemClock))
    }

    /// Controller whose debouncer reads time from `clock`.
    #[must_use]
    pub fn with_clock(
        catalog: Arc<Catalog>,
        view: ViewState,
        search_delay: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let visible = compute_visible_list(&catalog, &view);
        Self {
            catalog,
            view,
            visible,
            search: Debouncer::with_clock(clock),
            search_delay,
        }
    }

    /// The catalog this controller filters.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current view state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Products currently visible, in display order.
    #[must_use]
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Search term waiting for its quiet window, if any.
    #[must_use]
    pub fn pending_search(&self) -> Option<&str> {
        self.search.pending().map(String::as_str)
    }

    /// Configured quiet window for search updates.
    #[must_use]
    pub const fn search_delay(&self) -> Duration {
        self.search_delay
    }

    /// What: Record a new search term; it takes effect after the quiet window.
    ///
    /// Inputs:
    /// - `term`: Full search text as currently typed
    ///
    /// Output:
    /// - None; any previously pending term is replaced and the window re-armed.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search.schedule(term.into(), self.search_delay);
    }

    /// Flip `company` in the manufacturer selection. Returns `true` when the visible list was recomputed.
    pub fn toggle_company(&mut self, company: Company) -> bool {
        self.dispatch(ViewEvent::ToggleCompany(company))
    }

    /// Sort by `field`, flipping direction when it is already active.
    pub fn set_sort(&mut self, field: SortField) -> bool {
        self.dispatch(ViewEvent::SetSort(field))
    }

    /// Flip case-sensitive title matching.
    pub fn toggle_case_sensitive(&mut self) -> bool {
        self.dispatch(ViewEvent::ToggleCaseSensitive)
    }

    /// What: Reset search term and manufacturer selection.
    ///
    /// Output:
    /// - `true` when the visible list was recomputed.
    ///
    /// Details:
    /// - Cancels a pending search so it cannot re-apply the old term afterwards.
    pub fn clear_filters(&mut self) -> bool {
        self.search.cancel_pending();
        self.dispatch(ViewEvent::ClearFilters)
    }

    /// What: Apply the pending search term once its quiet window has elapsed.
    ///
    /// Output:
    /// - `true` when the visible list was recomputed.
    pub fn tick(&mut self) -> bool {
        match self.search.poll() {
            Some(term) => self.dispatch(ViewEvent::SetSearchTerm(term)),
            None => false,
        }
    }

    /// Apply the pending search term now, skipping the rest of the window.
    pub fn flush_search(&mut self) -> bool {
        match self.search.flush() {
            Some(term) => self.dispatch(ViewEvent::SetSearchTerm(term)),
            None => false,
        }
    }

    /// What: Apply `event` to the view state and recompute the visible list.
    ///
    /// Inputs:
    /// - `event`: View transition
    ///
    /// Output:
    /// - `true` when the state changed (and the list was recomputed); `false` for a no-op.
    pub fn dispatch(&mut self, event: ViewEvent) -> bool {
        let next = self.view.clone().apply(event);
        if next == self.view {
            return false;
        }
        self.view = next;
        self.visible = compute_visible_list(&self.catalog, &self.view);
        tracing::debug!(
            term = %self.view.search_term,
            companies = ?self.view.selected_companies,
            field = self.view.sort_field.as_config_key(),
            direction = self.view.sort_direction.as_config_key(),
            visible = self.visible.len(),
            "view updated"
        );
        true
    }
}
