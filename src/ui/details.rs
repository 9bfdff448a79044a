use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::{first_label, kv};
use crate::state::AppState;
use crate::theme::Theme;

/// Build the details pane lines for the selected product.
#[must_use]
pub fn details_lines(app: &AppState, th: &Theme) -> Vec<Line<'static>> {
    let Some(p) = app.selected_product() else {
        return vec![Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(th.overlay2),
        ))];
    };
    let mut lines = vec![
        Line::from(Span::styled(
            p.title.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        kv("Manufacturer", p.company.label().to_string(), th),
        kv("Calories", format!("{} kcal", p.kcal), th),
        kv("Sugar", format!("{:.1} g", p.sugar), th),
    ];
    if !p.image.is_empty() {
        lines.push(kv("Image", p.image.clone(), th));
    }
    lines.push(Line::from(""));
    lines.push(kv("Shop", p.shop_url(), th));
    let open = first_label(&app.keymap.open_link);
    if !open.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("[{open}] open in browser"),
            Style::default().fg(th.overlay1),
        )));
    }
    lines
}

/// Render the details pane.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let para = Paragraph::new(details_lines(app, th))
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled("Details", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(para, area);
}
