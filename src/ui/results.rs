use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::helpers::product_line;
use crate::state::{AppState, Focus};
use crate::theme::Theme;

/// What: Render the visible products as a selectable list.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable state; records `results_rect` and `results_page_rows`
/// - `area`: Target rectangle
/// - `th`: Theme palette
///
/// Details:
/// - Shows a "No matches" line when the derived list is empty.
/// - The title carries the visible and total counts.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let focused = matches!(app.focus, Focus::Results);
    let visible = app.controller.visible();
    let total = app.controller.catalog().len();
    let block = Block::default()
        .title(Span::styled(
            format!("Results ({}/{total})", visible.len()),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));
    let inner = block.inner(area);
    app.results_page_rows = usize::from(inner.height.max(1));

    if visible.is_empty() {
        app.results_rect = None;
        let empty = Paragraph::new(Line::from(Span::styled(
            "No matches",
            Style::default().fg(th.overlay2),
        )))
        .style(Style::default().bg(th.base))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Highlight symbol takes two columns.
    let row_width = usize::from(inner.width.saturating_sub(2));
    let items: Vec<ListItem> = visible
        .iter()
        .map(|p| ListItem::new(product_line(p, row_width, th)))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
    app.results_rect = Some((inner.x, inner.y, inner.width, inner.height));
}
