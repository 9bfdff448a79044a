//! Mouse event handling: toggle and sort buttons, result rows, wheel.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::utils::is_point_in_rect;
use crate::catalog::Company;
use crate::logic::selection::{apply_view_change, move_selection, select_index};
use crate::state::{AppState, Focus, SortField};

/// What: Handle a mouse event using the rectangles recorded in the last frame.
///
/// Inputs:
/// - `m`: Mouse event
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the event hit something and changed state.
///
/// Details:
/// - Left click on a manufacturer toggles it; on a sort button sorts; on the
///   case indicator flips case sensitivity; on a row selects it.
/// - The wheel moves the selection one row at a time.
pub fn handle_mouse_event(m: &MouseEvent, app: &mut AppState) -> bool {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::ScrollUp => {
            move_selection(app, -1);
            true
        }
        MouseEventKind::ScrollDown => {
            move_selection(app, 1);
            true
        }
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(mx, my, app),
        _ => false,
    }
}

/// Dispatch a left click at `(mx, my)`.
fn handle_left_click(mx: u16, my: u16, app: &mut AppState) -> bool {
    if let Some(company) = Company::ALL
        .into_iter()
        .find(|c| is_point_in_rect(mx, my, app.company_rects[c.index()]))
    {
        apply_view_change(app, |c| c.toggle_company(company));
        return true;
    }
    for (rect, field) in app.sort_rects.into_iter().zip(SortField::ALL) {
        if is_point_in_rect(mx, my, rect) {
            apply_view_change(app, |c| c.set_sort(field));
            return true;
        }
    }
    if is_point_in_rect(mx, my, app.case_rect) {
        apply_view_change(app, |c| c.toggle_case_sensitive());
        return true;
    }
    if is_point_in_rect(mx, my, app.search_rect) {
        app.focus = Focus::Search;
        return true;
    }
    if let Some((_, y, _, _)) = app.results_rect
        && is_point_in_rect(mx, my, app.results_rect)
    {
        let row = usize::from(my - y) + app.list_state.offset();
        app.focus = Focus::Results;
        select_index(app, row);
        return true;
    }
    false
}
