//! Catalog view state and its transition function.
//!
//! [`ViewState`] is a plain value: every interaction produces a new state via
//! [`ViewState::apply`], and the visible list is derived from it separately
//! (see [`crate::logic::compute_visible_list`]).

use std::collections::BTreeSet;

use crate::catalog::Company;
use crate::state::types::{SortDirection, SortField};

/// Everything that determines which products are visible and in what order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Title substring filter; empty matches everything.
    pub search_term: String,
    /// Manufacturer filter. Empty means no manufacturer filter.
    pub selected_companies: BTreeSet<Company>,
    /// Field the list is sorted by.
    pub sort_field: SortField,
    /// Direction for `sort_field`.
    pub sort_direction: SortDirection,
    /// Match the search term case-sensitively.
    pub case_sensitive: bool,
}

/// A user interaction that changes the [`ViewState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// Replace the search term.
    SetSearchTerm(String),
    /// Add the manufacturer to the selection, or remove it when present.
    ToggleCompany(Company),
    /// Flip direction when `field` is already active, else sort by `field` ascending.
    SetSort(SortField),
    /// Flip case-sensitive matching.
    ToggleCaseSensitive,
    /// Reset search term and manufacturer selection; sorting is kept.
    ClearFilters,
}

impl ViewState {
    /// What: Produce the state that follows `event`.
    ///
    /// Inputs:
    /// - `self`: Current state (consumed).
    /// - `event`: Interaction to apply.
    ///
    /// Output:
    /// - The next state. Applying an event never fails.
    #[must_use]
    pub fn apply(mut self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::SetSearchTerm(term) => self.search_term = term,
            ViewEvent::ToggleCompany(company) => {
                if !self.selected_companies.remove(&company) {
                    self.selected_companies.insert(company);
                }
            }
            ViewEvent::SetSort(field) => {
                if field == self.sort_field {
                    self.sort_direction = self.sort_direction.flipped();
                } else {
                    self.sort_field = field;
                    self.sort_direction = SortDirection::Ascending;
                }
            }
            ViewEvent::ToggleCaseSensitive => self.case_sensitive = !self.case_sensitive,
            ViewEvent::ClearFilters => {
                self.search_term.clear();
                self.selected_companies.clear();
            }
        }
        self
    }

    /// `true` when products from `company` pass the manufacturer filter.
    #[must_use]
    pub fn shows_company(&self, company: Company) -> bool {
        self.selected_companies.is_empty() || self.selected_companies.contains(&company)
    }

    /// `true` when `company` is explicitly selected.
    #[must_use]
    pub fn is_company_selected(&self, company: Company) -> bool {
        self.selected_companies.contains(&company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Same-field sort flips direction; a new field resets to ascending
    ///
    /// - Input: SetSort(Kcal) twice, then SetSort(Sugar) while descending
    /// - Output: asc -> desc -> asc on repeat; Sugar starts ascending
    fn set_sort_toggles_and_resets() {
        let s = ViewState::default();
        assert_eq!(s.sort_field, SortField::Kcal);
        assert_eq!(s.sort_direction, SortDirection::Ascending);

        let s = s.apply(ViewEvent::SetSort(SortField::Kcal));
        assert_eq!(s.sort_direction, SortDirection::Descending);
        let back = s.clone().apply(ViewEvent::SetSort(SortField::Kcal));
        assert_eq!(back.sort_direction, SortDirection::Ascending);

        let s = s.apply(ViewEvent::SetSort(SortField::Sugar));
        assert_eq!(s.sort_field, SortField::Sugar);
        assert_eq!(s.sort_direction, SortDirection::Ascending);
    }

    #[test]
    /// What: Company toggling is a membership flip
    ///
    /// - Input: Toggle Lotte, Binggrae, then Lotte again
    /// - Output: Only Binggrae remains selected
    fn toggle_company_membership() {
        let s = ViewState::default()
            .apply(ViewEvent::ToggleCompany(Company::Lotte))
            .apply(ViewEvent::ToggleCompany(Company::Binggrae))
            .apply(ViewEvent::ToggleCompany(Company::Lotte));
        assert!(s.is_company_selected(Company::Binggrae));
        assert!(!s.is_company_selected(Company::Lotte));
        assert_eq!(s.selected_companies.len(), 1);
    }

    #[test]
    /// What: Empty selection shows every manufacturer
    ///
    /// - Input: Default state, then one selected company
    /// - Output: All shown when empty; only the member when non-empty
    fn empty_selection_shows_all() {
        let s = ViewState::default();
        assert!(Company::ALL.iter().all(|c| s.shows_company(*c)));
        let s = s.apply(ViewEvent::ToggleCompany(Company::Haitai));
        assert!(s.shows_company(Company::Haitai));
        assert!(!s.shows_company(Company::Lotte));
    }

    #[test]
    /// What: ClearFilters keeps sorting but drops search and selection
    ///
    /// - Input: State with term, companies, sugar desc
    /// - Output: Empty term and selection; sugar desc retained
    fn clear_filters_keeps_sort() {
        let s = ViewState::default()
            .apply(ViewEvent::SetSearchTerm("바".into()))
            .apply(ViewEvent::ToggleCompany(Company::Lotte))
            .apply(ViewEvent::SetSort(SortField::Sugar))
            .apply(ViewEvent::SetSort(SortField::Sugar))
            .apply(ViewEvent::ClearFilters);
        assert!(s.search_term.is_empty());
        assert!(s.selected_companies.is_empty());
        assert_eq!(s.sort_field, SortField::Sugar);
        assert_eq!(s.sort_direction, SortDirection::Descending);
    }
}
