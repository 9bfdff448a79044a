//! Modularized state module.
//!
//! `view` holds the pure catalog view state; `app_state` wraps it together
//! with terminal-facing state (input box, selection, hit-test rectangles).

pub mod app_state;
pub mod modal;
pub mod types;
pub mod view;

// Public re-exports to keep paths short
pub use app_state::AppState;
pub use modal::Modal;
pub use types::{Focus, HitRect, SortDirection, SortField};
pub use view::{ViewEvent, ViewState};
