//! Shared formatting for the results list and details pane.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::Product;
use crate::theme::{KeyChord, Theme};
use crate::util::fit_to_width;

/// Columns taken by the numeric and manufacturer columns of a row.
const FIXED_COLUMNS: usize = 30;

/// What: Lay out one product as an aligned row.
///
/// Inputs:
/// - `p`: Product to format
/// - `width`: Total columns available for the row
///
/// Output:
/// - `(title, metrics, company)` strings; the title is padded or cut to fit.
///
/// Details:
/// - Titles are measured in display columns so Hangul stays aligned.
#[must_use]
pub fn row_columns(p: &Product, width: usize) -> (String, String, String) {
    let title_w = width.saturating_sub(FIXED_COLUMNS).max(8);
    (
        fit_to_width(&p.title, title_w),
        format!("{:>5} kcal {:>6.1} g", p.kcal, p.sugar),
        format!("  {}", p.company.label()),
    )
}

/// Styled list row for `p`.
#[must_use]
pub fn product_line(p: &Product, width: usize, th: &Theme) -> Line<'static> {
    let (title, metrics, company) = row_columns(p, width);
    Line::from(vec![
        Span::styled(title, Style::default().fg(th.text)),
        Span::styled(metrics, Style::default().fg(th.subtext0)),
        Span::styled(company, Style::default().fg(th.sapphire)),
    ])
}

/// Build a themed key-value line for the details pane.
#[must_use]
pub fn kv(key: &str, val: String, th: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{key}: "),
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(val, Style::default().fg(th.text)),
    ])
}

/// Label of the first chord bound to an action, or an empty string.
#[must_use]
pub fn first_label(list: &[KeyChord]) -> String {
    list.first().map(KeyChord::label).unwrap_or_default()
}

/// Centered rectangle of at most `w` x `h` inside `area`.
#[must_use]
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}
