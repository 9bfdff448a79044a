use std::fs;
use std::path::Path;

use ratatui::style::Color;

use super::parsing::{parse_color_value, split_setting_line};
use super::types::Theme;

/// Skeleton configuration file content with default color values.
pub(crate) const THEME_SKELETON_CONTENT: &str = "# scoops theme configuration\n\
#\n\
# Format: key = value\n\
# Value formats supported:\n\
#   - #RRGGBB (hex)\n\
#   - R,G,B (decimal, 0-255 each)\n\
# Keys left out keep the built-in Catppuccin Mocha color.\n\
#\n\
# Background layers (from darkest to lightest)\n\
background_base = #1e1e2e\n\
background_mantle = #181825\n\
background_crust = #11111b\n\
#\n\
# Component surfaces\n\
surface_level1 = #45475a\n\
surface_level2 = #585b70\n\
#\n\
# Low-contrast lines/borders\n\
overlay_primary = #7f849c\n\
overlay_secondary = #9399b2\n\
#\n\
# Text hierarchy\n\
text_primary = #cdd6f4\n\
text_secondary = #a6adc8\n\
text_tertiary = #bac2de\n\
#\n\
# Accents and semantic colors\n\
accent_interactive = #74c7ec\n\
accent_heading = #cba6f7\n\
accent_emphasis = #b4befe\n\
semantic_success = #a6e3a1\n\
semantic_warning = #f9e2af\n\
semantic_error = #f38ba8\n";

/// Skeleton `settings.conf` written on first run.
pub(crate) const SETTINGS_SKELETON_CONTENT: &str = "# scoops settings\n\
#\n\
# Format: key = value. Lines starting with # are comments.\n\
#\n\
# Initial sort: kcal | sugar, asc | desc\n\
sort_field = kcal\n\
sort_direction = asc\n\
#\n\
# Quiet window before a typed search is applied (milliseconds)\n\
search_debounce_ms = 300\n\
search_case_sensitive = false\n\
#\n\
# JSON catalog to load instead of the bundled one\n\
# catalog_path = /path/to/catalog.json\n\
#\n\
show_details_pane = true\n\
details_pane_pct = 35\n\
show_keybinds_footer = true\n\
#\n\
# Key bindings: Ctrl/Alt/Shift/Super modifiers joined with '+'.\n\
# Several chords may be given separated by commas, e.g. keybind_help = F1, Alt+H\n\
keybind_help = F1\n\
keybind_exit = Ctrl+C, Ctrl+Q\n\
keybind_reload_theme = Ctrl+R\n\
keybind_focus_next = Tab\n\
keybind_sort_kcal = F2\n\
keybind_sort_sugar = F3\n\
keybind_toggle_case = F4\n\
keybind_clear_filters = Ctrl+L\n\
keybind_company_1 = F5\n\
keybind_company_2 = F6\n\
keybind_company_3 = F7\n\
keybind_company_4 = F8\n\
keybind_company_5 = F9\n\
keybind_apply_search = Enter\n\
keybind_clear_search = Ctrl+U\n\
keybind_move_up = Up\n\
keybind_move_down = Down\n\
keybind_page_up = PgUp\n\
keybind_page_down = PgDn\n\
keybind_open_link = Ctrl+O\n";

/// Map a normalized theme key (preferred or palette name) to its palette slot.
fn palette_slot<'a>(theme: &'a mut Theme, key: &str) -> Option<&'a mut Color> {
    let slot = match key {
        "background_base" | "base" => &mut theme.base,
        "background_mantle" | "mantle" => &mut theme.mantle,
        "background_crust" | "crust" => &mut theme.crust,
        "surface_level1" | "surface1" => &mut theme.surface1,
        "surface_level2" | "surface2" => &mut theme.surface2,
        "overlay_primary" | "overlay1" => &mut theme.overlay1,
        "overlay_secondary" | "overlay2" => &mut theme.overlay2,
        "text_primary" | "text" => &mut theme.text,
        "text_secondary" | "subtext0" => &mut theme.subtext0,
        "text_tertiary" | "subtext1" => &mut theme.subtext1,
        "accent_interactive" | "sapphire" => &mut theme.sapphire,
        "accent_heading" | "mauve" => &mut theme.mauve,
        "accent_emphasis" | "lavender" => &mut theme.lavender,
        "semantic_success" | "green" => &mut theme.green,
        "semantic_warning" | "yellow" => &mut theme.yellow,
        "semantic_error" | "red" => &mut theme.red,
        _ => return None,
    };
    Some(slot)
}

/// What: Parse theme configuration text into a `Theme` on top of the built-in palette.
///
/// Inputs:
/// - `content`: `key = value` lines with hex or decimal colors.
///
/// Output:
/// - `Ok(Theme)` when every line is valid.
/// - `Err(String)` containing newline-separated diagnostics with line numbers.
///
/// Details:
/// - Missing keys keep the default color, so a partial file is valid.
pub(crate) fn parse_theme(content: &str) -> Result<Theme, String> {
    let mut theme = Theme::default();
    let mut errors: Vec<String> = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((key, val)) = split_setting_line(trimmed) else {
            errors.push(format!("- Missing '=' on line {line_no}"));
            continue;
        };
        if key.is_empty() {
            errors.push(format!("- Missing key before '=' on line {line_no}"));
            continue;
        }
        let Some(slot) = palette_slot(&mut theme, &key) else {
            errors.push(format!("- Unknown key '{key}' on line {line_no}"));
            continue;
        };
        match parse_color_value(val) {
            Some(color) => *slot = color,
            None => errors.push(format!(
                "- Invalid color for '{key}' on line {line_no} (use #RRGGBB or R,G,B)"
            )),
        }
    }
    if errors.is_empty() {
        Ok(theme)
    } else {
        Err(errors.join("\n"))
    }
}

/// Read and parse a theme file; see [`parse_theme`].
pub(crate) fn try_load_theme_with_diagnostics(path: &Path) -> Result<Theme, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse_theme(&content)
}

/// Write `content` to `path` unless a file already exists there.
pub(crate) fn write_skeleton_if_missing(path: &Path, content: &str) {
    if path.exists() {
        return;
    }
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match fs::write(path, content) {
        Ok(()) => tracing::info!(path = %path.display(), "wrote default configuration"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not write default configuration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The shipped skeleton parses to the default palette
    ///
    /// - Input: `THEME_SKELETON_CONTENT`
    /// - Output: `Theme::default()`
    fn skeleton_matches_default_palette() {
        assert_eq!(parse_theme(THEME_SKELETON_CONTENT), Ok(Theme::default()));
    }

    #[test]
    /// What: Partial files override only the keys they name
    ///
    /// - Input: "text = 1,2,3" and "accent-heading = #000000"
    /// - Output: Those two slots change; others keep defaults
    fn partial_override() {
        let theme = parse_theme("text = 1,2,3\naccent-heading = #000000\n").expect("valid");
        assert_eq!(theme.text, Color::Rgb(1, 2, 3));
        assert_eq!(theme.mauve, Color::Rgb(0, 0, 0));
        assert_eq!(theme.base, Theme::default().base);
    }

    #[test]
    /// What: Diagnostics carry line numbers for every bad line
    ///
    /// - Input: Unknown key, missing '=', and an invalid color
    /// - Output: Err listing three problems
    fn diagnostics_for_bad_lines() {
        let err = parse_theme("sparkle = #ffffff\nbase\ntext = nope\n").expect_err("invalid");
        assert!(err.contains("Unknown key 'sparkle' on line 1"));
        assert!(err.contains("Missing '=' on line 2"));
        assert!(err.contains("Invalid color for 'text' on line 3"));
    }

    #[test]
    /// What: Skeleton writer never clobbers an existing file
    ///
    /// - Input: Existing file with custom content
    /// - Output: Content unchanged; missing file gets created
    fn skeleton_written_only_when_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let existing = dir.path().join("theme.conf");
        fs::write(&existing, "text = #000000\n").expect("write");
        write_skeleton_if_missing(&existing, THEME_SKELETON_CONTENT);
        assert_eq!(
            fs::read_to_string(&existing).expect("read"),
            "text = #000000\n"
        );

        let fresh = dir.path().join("nested").join("settings.conf");
        write_skeleton_if_missing(&fresh, SETTINGS_SKELETON_CONTENT);
        assert_eq!(
            fs::read_to_string(&fresh).expect("read"),
            SETTINGS_SKELETON_CONTENT
        );
    }
}
