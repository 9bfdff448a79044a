use crate::logic::controller::CatalogController;
use crate::state::AppState;

/// What: Run a controller operation and keep the result selection stable.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `op`: Operation on the controller returning `true` when the visible list changed
///
/// Output:
/// - The value returned by `op`.
///
/// Details:
/// - Selection is restored by title when the item is still visible; otherwise
///   clamped, or cleared when the list is empty.
pub fn apply_view_change<F>(app: &mut AppState, op: F) -> bool
where
    F: FnOnce(&mut CatalogController) -> bool,
{
    let prev_title = app.selected_product().map(|p| p.title.clone());
    let changed = op(&mut app.controller);
    if changed {
        restore_selection(app, prev_title.as_deref());
    }
    changed
}

/// What: Reposition the selection after the visible list changed.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `prev_title`: Title selected before the change, if any
///
/// Output:
/// - Updates `app.selected` and `app.list_state`.
pub fn restore_selection(app: &mut AppState, prev_title: Option<&str>) {
    let visible = app.controller.visible();
    if visible.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    if let Some(pos) = prev_title.and_then(|t| visible.iter().position(|p| p.title == t)) {
        app.selected = pos;
    } else {
        app.selected = app.selected.min(visible.len() - 1);
    }
    app.list_state.select(Some(app.selected));
}

/// What: Move the selection by `delta` rows, clamped to the list bounds.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `delta`: Signed row offset (e.g. -1 up, +10 page down)
pub fn move_selection(app: &mut AppState, delta: isize) {
    let len = app.controller.visible().len();
    if len == 0 {
        app.list_state.select(None);
        return;
    }
    let cur = isize::try_from(app.selected).unwrap_or(isize::MAX);
    let max = isize::try_from(len - 1).unwrap_or(isize::MAX);
    let next = cur.saturating_add(delta).clamp(0, max);
    select_index(app, usize::try_from(next).unwrap_or(0));
}

/// Select `idx` when it is within the visible list.
pub fn select_index(app: &mut AppState, idx: usize) {
    if idx < app.controller.visible().len() {
        app.selected = idx;
        app.list_state.select(Some(idx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Company;

    #[test]
    /// What: Selection follows the same product across a re-sort
    ///
    /// - Input: Select third row, flip kcal direction
    /// - Output: Same title still selected at its new index
    fn selection_preserved_by_title() {
        let mut app = AppState::default();
        select_index(&mut app, 2);
        let title = app.selected_product().map(|p| p.title.clone());
        apply_view_change(&mut app, |c| c.set_sort(crate::state::SortField::Kcal));
        assert_eq!(app.selected_product().map(|p| p.title.clone()), title);
        assert_eq!(app.list_state.selected(), Some(app.selected));
    }

    #[test]
    /// What: Selection clamps when the item disappears and clears on empty lists
    ///
    /// - Input: Select last row, filter to one company; then search for nothing
    /// - Output: Index within bounds; then no selection
    fn selection_clamps_and_clears() {
        let mut app = AppState::default();
        let last = app.controller.visible().len() - 1;
        select_index(&mut app, last);
        apply_view_change(&mut app, |c| c.toggle_company(Company::Lalasweet));
        assert!(app.selected < app.controller.visible().len());

        apply_view_change(&mut app, |c| {
            c.set_search_term("존재하지 않는 상품");
            c.flush_search()
        });
        assert!(app.controller.visible().is_empty());
        assert_eq!(app.list_state.selected(), None);
        assert!(app.selected_product().is_none());
    }

    #[test]
    /// What: Relative moves clamp at both ends
    ///
    /// - Input: Move up from 0; page down past the end
    /// - Output: Stays at 0; lands on last row
    fn move_selection_clamps() {
        let mut app = AppState::default();
        move_selection(&mut app, -1);
        assert_eq!(app.selected, 0);
        move_selection(&mut app, 1_000);
        assert_eq!(app.selected, app.controller.visible().len() - 1);
    }
}
