use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::{SETTINGS_SKELETON_CONTENT, write_skeleton_if_missing};
use super::parsing::{parse_bool, parse_key_chord, split_setting_line};
use super::paths::settings_config_path;
use super::types::{KeyChord, KeyMap, Settings};
use crate::state::{SortDirection, SortField};

/// What: Parse a comma-separated list of chords, e.g. `"F1, Alt+H"`.
///
/// Output:
/// - `Some(chords)` when every entry parses and the list is non-empty; `None` otherwise.
fn parse_chord_list(val: &str) -> Option<Vec<KeyChord>> {
    let mut out: Vec<KeyChord> = Vec::new();
    for part in val.split(',') {
        let chord = parse_key_chord(part)?;
        if !out.contains(&chord) {
            out.push(chord);
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Resolve a normalized `keybind_*` key to its key map slot.
fn keybind_slot<'a>(keymap: &'a mut KeyMap, key: &str) -> Option<&'a mut Vec<KeyChord>> {
    let slot = match key {
        "keybind_help" | "keybind_help_overlay" => &mut keymap.help_overlay,
        "keybind_exit" | "keybind_quit" => &mut keymap.exit,
        "keybind_reload_theme" => &mut keymap.reload_theme,
        "keybind_focus_next" => &mut keymap.focus_next,
        "keybind_sort_kcal" => &mut keymap.sort_kcal,
        "keybind_sort_sugar" => &mut keymap.sort_sugar,
        "keybind_toggle_case" => &mut keymap.toggle_case,
        "keybind_clear_filters" => &mut keymap.clear_filters,
        "keybind_open_link" => &mut keymap.open_link,
        "keybind_apply_search" => &mut keymap.apply_search,
        "keybind_clear_search" => &mut keymap.clear_search,
        "keybind_move_up" => &mut keymap.move_up,
        "keybind_move_down" => &mut keymap.move_down,
        "keybind_page_up" => &mut keymap.page_up,
        "keybind_page_down" => &mut keymap.page_down,
        other => {
            let n: usize = other.strip_prefix("keybind_company_")?.parse().ok()?;
            return keymap.company_toggles.get_mut(n.checked_sub(1)?);
        }
    };
    Some(slot)
}

/// What: Parse settings.conf content into `settings`.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys and unparsable values leave the previous value and log a warning.
/// - A keybind entry replaces all default chords for that action.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for (idx, line) in content.lines().enumerate() {
        let Some((key, val)) = split_setting_line(line) else {
            continue;
        };
        let applied = apply_setting(&key, val, settings);
        if !applied {
            warn!(line = idx + 1, key = %key, value = %val, "ignoring settings entry");
        }
    }
}

/// Apply one normalized `key = value` pair. Returns `false` when it was not understood.
fn apply_setting(key: &str, val: &str, settings: &mut Settings) -> bool {
    match key {
        "sort_field" => SortField::from_config_key(val)
            .map(|f| settings.sort_field = f)
            .is_some(),
        "sort_direction" => SortDirection::from_config_key(val)
            .map(|d| settings.sort_direction = d)
            .is_some(),
        "search_debounce_ms" => val
            .parse::<u64>()
            .map(|ms| settings.search_debounce_ms = ms)
            .is_ok(),
        "search_case_sensitive" => parse_bool(val)
            .map(|b| settings.search_case_sensitive = b)
            .is_some(),
        "catalog_path" => {
            settings.catalog_path = if val.is_empty() {
                None
            } else {
                Some(expand_home(val))
            };
            true
        }
        "show_details_pane" => parse_bool(val)
            .map(|b| settings.show_details_pane = b)
            .is_some(),
        "show_keybinds_footer" => parse_bool(val)
            .map(|b| settings.show_keybinds_footer = b)
            .is_some(),
        "details_pane_pct" => match val.parse::<u16>() {
            Ok(v) if (10..=80).contains(&v) => {
                settings.details_pane_pct = v;
                true
            }
            _ => false,
        },
        k if k.starts_with("keybind_") => {
            let Some(chords) = parse_chord_list(val) else {
                return false;
            };
            keybind_slot(&mut settings.keymap, k)
                .map(|slot| *slot = chords)
                .is_some()
        }
        _ => false,
    }
}

/// Expand a leading `~/` against `$HOME`.
fn expand_home(val: &str) -> PathBuf {
    if let Some(rest) = val.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return Path::new(&home).join(rest);
    }
    PathBuf::from(val)
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: settings.conf location.
///
/// Output:
/// - Parsed `Settings`; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => debug!(path = %path.display(), error = %e, "settings not readable; using defaults"),
    }
    out
}

/// What: Load user settings and keybinds from `settings.conf` in the config directory.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
///
/// Details:
/// - Writes a commented skeleton first when the file does not exist yet.
#[must_use]
pub fn settings() -> Settings {
    let path = settings_config_path();
    write_skeleton_if_missing(&path, SETTINGS_SKELETON_CONTENT);
    load_settings_from(&path)
}
