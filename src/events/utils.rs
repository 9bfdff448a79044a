use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::HitRect;
use crate::theme::KeyChord;

/// What: Check whether `ke` triggers any chord in `list`.
///
/// Details:
/// - Exact code and modifier match, or a `Shift+<char>` chord against the
///   uppercase character terminals report for it.
pub fn matches_any(ke: &KeyEvent, list: &[KeyChord]) -> bool {
    list.iter().any(|c| {
        if c.code == ke.code && c.mods == ke.modifiers {
            return true;
        }
        match (c.code, ke.code) {
            (KeyCode::Char(cfg_ch), KeyCode::Char(ev_ch)) if c.mods.contains(KeyModifiers::SHIFT) => {
                ev_ch == cfg_ch.to_ascii_uppercase()
                    || (ke.modifiers.contains(KeyModifiers::SHIFT)
                        && ev_ch.to_ascii_lowercase() == cfg_ch)
            }
            _ => false,
        }
    })
}

/// What: Determine if mouse coordinates fall within a recorded rectangle.
///
/// Inputs:
/// - `mx`, `my`: Mouse column and row
/// - `rect`: Optional rectangle (x, y, width, height)
///
/// Output:
/// - `true` if the point is within the rectangle; `false` for `None`.
///
/// Details:
/// - Inclusive start and exclusive end bounds.
pub const fn is_point_in_rect(mx: u16, my: u16, rect: Option<HitRect>) -> bool {
    if let Some((x, y, w, h)) = rect {
        mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
    } else {
        false
    }
}
