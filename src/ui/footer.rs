use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::helpers::first_label;
use crate::state::AppState;
use crate::theme::Theme;

/// Key hint line: one `[chord] action` pair per main binding.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let km = &app.keymap;
    let company_keys = {
        let first = first_label(&km.company_toggles[0]);
        let last = first_label(&km.company_toggles[km.company_toggles.len() - 1]);
        format!("{first}-{last}")
    };
    let hints = [
        (first_label(&km.help_overlay), "help"),
        (company_keys, "manufacturer"),
        (first_label(&km.sort_kcal), "kcal"),
        (first_label(&km.sort_sugar), "sugar"),
        (first_label(&km.toggle_case), "case"),
        (first_label(&km.clear_filters), "clear"),
        (first_label(&km.open_link), "shop"),
        (first_label(&km.exit), "quit"),
    ];
    let mut spans: Vec<Span> = Vec::new();
    for (chord, action) in hints {
        if chord.is_empty() {
            continue;
        }
        spans.push(Span::styled(
            format!("[{chord}]"),
            Style::default().fg(th.sapphire),
        ));
        spans.push(Span::styled(
            format!(" {action}  "),
            Style::default().fg(th.subtext1),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle)),
        area,
    );
}
