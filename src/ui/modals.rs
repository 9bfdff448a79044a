use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::helpers::centered_rect;
use crate::catalog::Company;
use crate::state::{AppState, Modal};
use crate::theme::{KeyChord, Theme};

/// Render the open modal, if any, above the main view.
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    match &app.modal {
        Modal::None => {}
        Modal::Help => render_help(f, app, area, th),
        Modal::Alert { message } => render_alert(f, message, area, th),
    }
}

/// Format one help row: padded action label and all bound chords.
fn binding_line(label: &str, chords: &[KeyChord], th: &Theme) -> Line<'static> {
    let keys = chords
        .iter()
        .map(|c| format!("[{}]", c.label()))
        .collect::<Vec<_>>()
        .join(" ");
    Line::from(vec![
        Span::styled(
            format!("{label:22}"),
            Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            keys,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Help lines listing every configured binding.
fn help_lines(app: &AppState, th: &Theme) -> Vec<Line<'static>> {
    let km = &app.keymap;
    let mut lines = vec![
        Line::from(Span::styled(
            "scoops help",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        binding_line("Help", &km.help_overlay, th),
        binding_line("Exit", &km.exit, th),
        binding_line("Reload theme", &km.reload_theme, th),
        binding_line("Switch focus", &km.focus_next, th),
        binding_line("Sort by calories", &km.sort_kcal, th),
        binding_line("Sort by sugar", &km.sort_sugar, th),
        binding_line("Case-sensitive search", &km.toggle_case, th),
        binding_line("Clear filters", &km.clear_filters, th),
    ];
    for company in Company::ALL {
        lines.push(binding_line(
            &format!("Toggle {}", company.label()),
            &km.company_toggles[company.index()],
            th,
        ));
    }
    lines.extend([
        binding_line("Apply search now", &km.apply_search, th),
        binding_line("Clear search", &km.clear_search, th),
        binding_line("Move up / down", &[km.move_up.clone(), km.move_down.clone()].concat(), th),
        binding_line("Page up / down", &[km.page_up.clone(), km.page_down.clone()].concat(), th),
        binding_line("Open shop link", &km.open_link, th),
        Line::from(""),
        Line::from(Span::styled(
            "Click a manufacturer or sort button to toggle it. Esc closes.",
            Style::default().fg(th.subtext0),
        )),
    ]);
    lines
}

/// Full-size help overlay.
fn render_help(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let rect = centered_rect(area, 72, 28);
    f.render_widget(Clear, rect);
    let para = Paragraph::new(help_lines(app, th))
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(" Help ", Style::default().fg(th.mauve)))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(para, rect);
}

/// Alert box sized to the message.
fn render_alert(f: &mut Frame, message: &str, area: Rect, th: &Theme) {
    let h = u16::try_from(message.lines().count()).unwrap_or(20).min(20) + 4;
    let rect = centered_rect(area, 70, h);
    f.render_widget(Clear, rect);
    let mut lines: Vec<Line> = message
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter or Esc to close",
        Style::default().fg(th.subtext1),
    )));
    let para = Paragraph::new(lines)
        .style(Style::default().bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Error ",
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.red))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(para, rect);
}
