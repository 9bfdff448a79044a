use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use super::types::KeyChord;

/// What: Parse a single key identifier (e.g., "F5", "Esc", "?", "r") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the input token is unsupported.
///
/// Details:
/// - Supports function keys, navigation keys, and single printable characters.
/// - Normalizes character keys to lowercase for consistent matching.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" | "SHIFT+TAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "INSERT" | "INS" => Some(KeyCode::Insert),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" | "PGUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" | "PGDN" => Some(KeyCode::PageDown),
        "UP" | "ARROWUP" => Some(KeyCode::Up),
        "DOWN" | "ARROWDOWN" => Some(KeyCode::Down),
        "LEFT" | "ARROWLEFT" => Some(KeyCode::Left),
        "RIGHT" | "ARROWRIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            // Single visible character, e.g. "?" or "r"; normalize to lowercase
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// What: Parse a full key chord such as "Ctrl+R" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `text`: Chord text combining optional modifiers with a key token.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` on invalid modifier/key combinations.
///
/// Details:
/// - Recognizes Ctrl/Alt/Shift/Super modifiers in any case.
/// - Normalizes `Shift+Tab` to the dedicated `BackTab` key code and clears modifiers.
pub(crate) fn parse_key_chord(text: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<String> = None;
    for part in text.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            "SUPER" | "META" | "WIN" => mods |= KeyModifiers::SUPER,
            other => {
                key_part = Some(other.to_string());
            }
        }
    }
    if key_part.as_deref() == Some("TAB") && mods.contains(KeyModifiers::SHIFT) {
        return Some(KeyChord::plain(KeyCode::BackTab));
    }
    let code = parse_key_identifier(key_part.as_deref().unwrap_or(""))?;
    Some(KeyChord { code, mods })
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string potentially containing inline comments.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Strips trailing comments beginning with `//` or secondary `#` markers.
/// - Accepts `#RRGGBB` hex and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let mut t = s.trim();
    if let Some(i) = t.find("//") {
        t = &t[..i];
    }
    // Preserve a leading '#' for hex values by searching for '#' only after the first char.
    if let Some(i_rel) = if let Some(stripped) = t.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        t.find('#')
    } {
        t = &t[..i_rel];
    }
    t = t.trim();
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if parts.len() == 3 {
        let r = parts[0].trim().parse::<u8>().ok()?;
        let g = parts[1].trim().parse::<u8>().ok()?;
        let b = parts[2].trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// Strip a trailing `# ...` or `// ...` comment from a settings value.
pub(crate) fn strip_inline_comment(val: &str) -> &str {
    let mut end = val.len();
    if let Some(i) = val.find(" #") {
        end = end.min(i);
    }
    if let Some(i) = val.find("//") {
        end = end.min(i);
    }
    val[..end].trim()
}

/// Parse a boolean setting (`true/false`, `1/0`, `yes/no`, `on/off`).
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Split a `key = value` line into a normalized key and a comment-free value.
///
/// Returns `None` for blank lines, comments, and lines without `=`.
pub(crate) fn split_setting_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(raw_val.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Key chords parse modifiers, function keys and characters
    ///
    /// - Input: "Ctrl+R", "alt + x", "F5", "Shift+Tab", "PgDn", "Shift+G", "Ctrl+Nope"
    /// - Output: Matching chords; None for an unknown token
    fn key_chord_parsing() {
        assert_eq!(parse_key_chord("Ctrl+R"), Some(KeyChord::ctrl('r')));
        assert_eq!(
            parse_key_chord("alt + x"),
            Some(KeyChord {
                code: KeyCode::Char('x'),
                mods: KeyModifiers::ALT
            })
        );
        assert_eq!(parse_key_chord("F5"), Some(KeyChord::plain(KeyCode::F(5))));
        assert_eq!(
            parse_key_chord("Shift+Tab"),
            Some(KeyChord::plain(KeyCode::BackTab))
        );
        assert_eq!(
            parse_key_chord("PgDn"),
            Some(KeyChord::plain(KeyCode::PageDown))
        );
        assert_eq!(
            parse_key_chord("Shift+G"),
            Some(KeyChord {
                code: KeyCode::Char('g'),
                mods: KeyModifiers::SHIFT
            })
        );
        assert_eq!(parse_key_chord("Ctrl+Nope"), None);
    }

    #[test]
    /// What: Color values in hex and decimal, with trailing comments
    ///
    /// - Input: "#1e1e2e", "205,214,244 // text", "#abcdef # note", "300,0,0", "blue"
    /// - Output: RGB colors; None for out-of-range and names
    fn color_value_parsing() {
        assert_eq!(
            parse_color_value("#1e1e2e"),
            Some(Color::Rgb(0x1e, 0x1e, 0x2e))
        );
        assert_eq!(
            parse_color_value("205,214,244 // text"),
            Some(Color::Rgb(205, 214, 244))
        );
        assert_eq!(
            parse_color_value("#abcdef # note"),
            Some(Color::Rgb(0xab, 0xcd, 0xef))
        );
        assert_eq!(parse_color_value("300,0,0"), None);
        assert_eq!(parse_color_value("blue"), None);
    }

    #[test]
    /// What: Settings lines split into normalized keys and values
    ///
    /// - Input: Comment, blank, "Sort-Field = sugar # note", "no_equals"
    /// - Output: Only the key/value line yields ("sort_field", "sugar")
    fn setting_line_splitting() {
        assert_eq!(split_setting_line("# comment"), None);
        assert_eq!(split_setting_line("   "), None);
        assert_eq!(split_setting_line("no_equals"), None);
        assert_eq!(
            split_setting_line("Sort-Field = sugar # note"),
            Some(("sort_field".to_string(), "sugar"))
        );
        assert_eq!(parse_bool("On"), Some(true));
        assert_eq!(parse_bool("nah"), None);
    }
}
