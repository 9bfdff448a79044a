//! Core non-UI logic split into modular submodules.

pub mod controller;
pub mod debounce;
pub mod filter;
pub mod selection;
pub mod sort;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use controller::{CatalogController, DEFAULT_SEARCH_DEBOUNCE};
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use filter::{compute_visible_list, title_matches};
pub use selection::{apply_view_change, move_selection, restore_selection, select_index};
pub use sort::{compare_by, sort_products};
