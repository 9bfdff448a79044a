//! Frame rendering.
//!
//! Layout, top to bottom: search box, control row (manufacturer toggles,
//! sort buttons), results with an optional details pane, key hint footer.
//! Modals draw last.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod controls;
mod details;
mod footer;
pub mod helpers;
mod modals;
mod results;

/// What: Render one full frame from the current state.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Mutable state; hit-test rectangles are refreshed here
///
/// Details:
/// - Pure rendering apart from the recorded rectangles and list scroll offset.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.show_keybinds_footer);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(footer_h),
        ])
        .split(area);

    controls::render_search(f, app, rows[0], &th);
    controls::render_controls(f, app, rows[1], &th);

    if app.show_details {
        let pct = app.details_pct.min(80);
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100 - pct), Constraint::Percentage(pct)])
            .split(rows[2]);
        results::render_results(f, app, main[0], &th);
        details::render_details(f, app, main[1], &th);
    } else {
        results::render_results(f, app, rows[2], &th);
    }

    if app.show_keybinds_footer {
        footer::render_footer(f, app, rows[3], &th);
    }
    modals::render_modal(f, app, area, &th);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Company;
    use crate::logic::selection::apply_view_change;
    use crate::state::Modal;
    use ratatui::{Terminal, backend::TestBackend};

    /// Render `app` into a test terminal and return the buffer as text.
    fn render(app: &mut AppState, w: u16, h: u16) -> String {
        let backend = TestBackend::new(w, h);
        let mut term = Terminal::new(backend).expect("failed to create test terminal");
        term.draw(|f| ui(f, app)).expect("draw");
        let buf = term.backend().buffer();
        let mut out = String::new();
        for y in 0..h {
            for x in 0..w {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    /// What: A frame records every hit-test rectangle
    ///
    /// - Input: Default state on a 140x30 terminal
    /// - Output: Search, results, all company, sort and case rects are `Some`
    fn frame_records_hit_rects() {
        let mut app = AppState::default();
        render(&mut app, 140, 30);
        assert!(app.search_rect.is_some());
        assert!(app.results_rect.is_some());
        assert!(app.company_rects.iter().all(Option::is_some));
        assert!(app.sort_rects.iter().all(Option::is_some));
        assert!(app.case_rect.is_some());
        assert!(app.results_page_rows > 0);
    }

    #[test]
    /// What: Empty results render the "No matches" line and drop the row rect
    ///
    /// - Input: Search for a title that does not exist
    /// - Output: Buffer contains "No matches"; `results_rect` is `None`
    fn empty_results_message() {
        let mut app = AppState::default();
        apply_view_change(&mut app, |c| {
            c.set_search_term("zzzz-nothing");
            c.flush_search()
        });
        let text = render(&mut app, 120, 24);
        assert!(text.contains("No matches"));
        assert!(app.results_rect.is_none());
    }

    #[test]
    /// What: Manufacturer labels and the help overlay are drawn
    ///
    /// - Input: Default state, then Help modal
    /// - Output: Results count in the title; help text present
    fn labels_and_help_overlay() {
        let mut app = AppState::default();
        let total = app.controller.catalog().len();
        let text = render(&mut app, 140, 30);
        assert!(text.contains(&format!("Results ({total}/{total})")));
        assert!(app.company_rects[Company::HaagenDazs.index()].is_some());

        app.modal = Modal::Help;
        let text = render(&mut app, 140, 30);
        assert!(text.contains("scoops help"));
    }
}
