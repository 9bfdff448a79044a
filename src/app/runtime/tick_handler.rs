use crate::logic::selection::apply_view_change;
use crate::state::AppState;

/// What: Handle a periodic tick.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when a debounced search was applied and the list changed.
///
/// Details:
/// - Applies the pending search term once its quiet window has elapsed,
///   keeping the selection on the same product when it is still visible.
pub fn handle_tick(app: &mut AppState) -> bool {
    apply_view_change(app, |c| c.tick())
}
