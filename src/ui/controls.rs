//! Search box and the manufacturer/sort control row.

use ratatui::{
    Frame,
    layout::Rect,
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::catalog::Company;
use crate::state::{AppState, Focus, HitRect, SortField};
use crate::theme::Theme;

/// Draw the search input and place the cursor after the typed text.
pub fn render_search(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let focused = matches!(app.focus, Focus::Search);
    let accent = if focused { th.mauve } else { th.surface1 };
    let mut title = vec![Span::styled(
        if focused { "Search (focused)" } else { "Search" },
        Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
    )];
    if app.controller.pending_search().is_some() {
        title.push(Span::styled("  …", Style::default().fg(th.yellow)));
    }
    let input_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let input = Paragraph::new(input_line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Line::from(title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        );
    f.render_widget(input, area);
    app.search_rect = Some((area.x, area.y, area.width, area.height));

    if focused {
        let right = area.x + area.width.saturating_sub(2);
        let typed = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
        let x = (area.x + 3).saturating_add(typed).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Clickable segment of the control row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    /// Manufacturer toggle.
    Company(Company),
    /// Sort button.
    Sort(SortField),
    /// Case sensitivity indicator.
    Case,
}

/// What: Build the control row spans and the column range of every button.
///
/// Output:
/// - Spans to render and `(target, start column, width)` relative to the row start.
fn control_spans(app: &AppState, th: &Theme) -> (Vec<Span<'static>>, Vec<(Target, u16, u16)>) {
    let view = app.controller.view();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut hits: Vec<(Target, u16, u16)> = Vec::new();
    let mut x: u16 = 0;
    let mut push = |spans: &mut Vec<Span<'static>>, text: String, style: Style| -> (u16, u16) {
        let w = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let start = x;
        x = x.saturating_add(w);
        spans.push(Span::styled(text, style));
        (start, w)
    };
    let on = Style::default()
        .fg(th.crust)
        .bg(th.sapphire)
        .add_modifier(Modifier::BOLD);
    let off = Style::default().fg(th.subtext0).bg(th.surface1);
    let label = Style::default().fg(th.overlay1);

    push(&mut spans, "Manufacturer ".to_string(), label);
    for company in Company::ALL {
        let style = if view.is_company_selected(company) { on } else { off };
        let (start, w) = push(&mut spans, format!(" {} ", company.label()), style);
        hits.push((Target::Company(company), start, w));
        push(&mut spans, " ".to_string(), Style::default());
    }
    push(&mut spans, "  Sort ".to_string(), label);
    for field in SortField::ALL {
        let active = view.sort_field == field;
        let text = if active {
            format!(" {} {} ", field.label(), view.sort_direction.arrow())
        } else {
            format!(" {} ", field.label())
        };
        let (start, w) = push(&mut spans, text, if active { on } else { off });
        hits.push((Target::Sort(field), start, w));
        push(&mut spans, " ".to_string(), Style::default());
    }
    push(&mut spans, "  ".to_string(), Style::default());
    let (start, w) = push(
        &mut spans,
        " Aa ".to_string(),
        if view.case_sensitive { on } else { off },
    );
    hits.push((Target::Case, start, w));
    (spans, hits)
}

/// What: Draw manufacturer toggles, sort buttons and the case indicator.
///
/// Details:
/// - Records every button rectangle into `app` for mouse hit-testing; buttons
///   clipped by a narrow terminal get no rectangle.
pub fn render_controls(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let (spans, hits) = control_spans(app, th);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(area);
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(th.base))
            .block(block),
        area,
    );

    app.company_rects = [None; Company::COUNT];
    app.sort_rects = [None; 2];
    app.case_rect = None;
    for (target, start, w) in hits {
        if start.saturating_add(w) > inner.width {
            continue;
        }
        let rect: HitRect = (inner.x + start, inner.y, w, 1);
        match target {
            Target::Company(c) => app.company_rects[c.index()] = Some(rect),
            Target::Sort(SortField::Kcal) => app.sort_rects[0] = Some(rect),
            Target::Sort(SortField::Sugar) => app.sort_rects[1] = Some(rect),
            Target::Case => app.case_rect = Some(rect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Control buttons do not overlap and follow display order
    ///
    /// - Input: Default state
    /// - Output: Five manufacturers, two sorts, one case button, increasing starts
    fn control_hits_ordered() {
        let app = AppState::default();
        let (_, hits) = control_spans(&app, &Theme::default());
        assert_eq!(hits.len(), Company::COUNT + 3);
        for pair in hits.windows(2) {
            assert!(pair[0].1 + pair[0].2 <= pair[1].1);
        }
        assert_eq!(hits[0].0, Target::Company(Company::Haitai));
        assert_eq!(hits[Company::COUNT].0, Target::Sort(SortField::Kcal));
    }
}
