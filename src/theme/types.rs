use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use crate::catalog::Company;
use crate::state::{SortDirection, SortField};

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for captions and low-emphasis content.
    pub subtext1: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Initial sort field.
    pub sort_field: SortField,
    /// Initial sort direction.
    pub sort_direction: SortDirection,
    /// Quiet window for search input, in milliseconds.
    pub search_debounce_ms: u64,
    /// Initial case sensitivity of the title search.
    pub search_case_sensitive: bool,
    /// JSON catalog to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
    /// Show the details pane next to the results.
    pub show_details_pane: bool,
    /// Width of the details pane as a percentage of the main row.
    pub details_pane_pct: u16,
    /// Show the key hint footer.
    pub show_keybinds_footer: bool,
    /// Configurable key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_field: SortField::Kcal,
            sort_direction: SortDirection::Ascending,
            search_debounce_ms: 300,
            search_case_sensitive: false,
            catalog_path: None,
            show_details_pane: true,
            details_pane_pct: 35,
            show_keybinds_footer: true,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Modifier set that must match exactly.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    /// Chord with the Control modifier.
    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            mods: KeyModifiers::CONTROL,
        }
    }

    /// Return a short display label such as "Ctrl+R", "F1", "Shift+Del".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Insert => "Ins".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    // Global
    /// Open the help overlay.
    pub help_overlay: Vec<KeyChord>,
    /// Re-read `theme.conf`.
    pub reload_theme: Vec<KeyChord>,
    /// Quit.
    pub exit: Vec<KeyChord>,
    /// Switch focus between the search input and the results.
    pub focus_next: Vec<KeyChord>,

    // View
    /// Sort by calories (flip direction when already active).
    pub sort_kcal: Vec<KeyChord>,
    /// Sort by sugar (flip direction when already active).
    pub sort_sugar: Vec<KeyChord>,
    /// Toggle case-sensitive search.
    pub toggle_case: Vec<KeyChord>,
    /// Reset search and manufacturer selection.
    pub clear_filters: Vec<KeyChord>,
    /// One toggle per manufacturer, indexed like [`Company::ALL`].
    pub company_toggles: [Vec<KeyChord>; Company::COUNT],

    // Search
    /// Apply the typed search immediately.
    pub apply_search: Vec<KeyChord>,
    /// Empty the search input.
    pub clear_search: Vec<KeyChord>,

    // Results
    /// Selection up.
    pub move_up: Vec<KeyChord>,
    /// Selection down.
    pub move_down: Vec<KeyChord>,
    /// Selection up by a page.
    pub page_up: Vec<KeyChord>,
    /// Selection down by a page.
    pub page_down: Vec<KeyChord>,
    /// Open the shop link of the selected product.
    pub open_link: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{Down, Enter, F, PageDown, PageUp, Tab, Up};
        Self {
            help_overlay: vec![KeyChord::plain(F(1))],
            reload_theme: vec![KeyChord::ctrl('r')],
            exit: vec![KeyChord::ctrl('c'), KeyChord::ctrl('q')],
            focus_next: vec![KeyChord::plain(Tab)],

            sort_kcal: vec![KeyChord::plain(F(2))],
            sort_sugar: vec![KeyChord::plain(F(3))],
            toggle_case: vec![KeyChord::plain(F(4))],
            clear_filters: vec![KeyChord::ctrl('l')],
            company_toggles: [
                vec![KeyChord::plain(F(5))],
                vec![KeyChord::plain(F(6))],
                vec![KeyChord::plain(F(7))],
                vec![KeyChord::plain(F(8))],
                vec![KeyChord::plain(F(9))],
            ],

            apply_search: vec![KeyChord::plain(Enter)],
            clear_search: vec![KeyChord::ctrl('u')],

            move_up: vec![KeyChord::plain(Up)],
            move_down: vec![KeyChord::plain(Down)],
            page_up: vec![KeyChord::plain(PageUp)],
            page_down: vec![KeyChord::plain(PageDown)],
            open_link: vec![KeyChord::ctrl('o')],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Chord labels render modifiers and special keys
    ///
    /// - Input: Ctrl+Q, F5, Shift+Tab, Space
    /// - Output: "Ctrl+Q", "F5", "Shift+Tab", "Space"
    fn key_chord_labels() {
        assert_eq!(KeyChord::ctrl('q').label(), "Ctrl+Q");
        assert_eq!(KeyChord::plain(KeyCode::F(5)).label(), "F5");
        assert_eq!(KeyChord::plain(KeyCode::BackTab).label(), "Shift+Tab");
        assert_eq!(KeyChord::plain(KeyCode::Char(' ')).label(), "Space");
    }

    #[test]
    /// What: Default key map gives every manufacturer a distinct toggle
    ///
    /// - Input: Default key map
    /// - Output: Five non-empty, pairwise distinct toggle bindings
    fn default_company_toggles_distinct() {
        let km = KeyMap::default();
        let firsts: Vec<KeyChord> = km.company_toggles.iter().map(|v| v[0]).collect();
        for (i, a) in firsts.iter().enumerate() {
            for b in &firsts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
