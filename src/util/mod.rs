//! Small helpers shared by the UI and the CLI: URL building, opening links,
//! and display-width aware text fitting for Hangul titles.

use std::fmt::Write as _;
#[cfg(not(test))]
use std::process::{Command, Stdio};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Product search page of the online shop; the title is appended percent-encoded.
pub const SHOP_SEARCH_BASE: &str = "https://www.coupang.com/np/search?q=";

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - Operates on raw UTF-8 bytes, so every Hangul syllable becomes three escapes.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// Shop search link for a product title.
#[must_use]
pub fn shop_search_url(title: &str) -> String {
    format!("{SHOP_SEARCH_BASE}{}", percent_encode(title))
}

/// Spawn `program args... url` detached from the terminal.
#[cfg(not(test))]
fn spawn_opener(program: &str, args: &[&str], url: &str) -> std::io::Result<()> {
    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// What: Open a URL in the default browser without blocking the UI.
///
/// Inputs:
/// - `url`: Link to open.
///
/// Details:
/// - Tries `xdg-open` then `open` on Unix, `cmd /c start` on Windows.
/// - Runs on a short-lived thread; failures are logged, never surfaced.
/// - Does nothing under `cfg(test)`.
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            let result = spawn_opener("cmd", &["/c", "start", ""], &url);
            #[cfg(not(target_os = "windows"))]
            let result =
                spawn_opener("xdg-open", &[], &url).or_else(|_| spawn_opener("open", &[], &url));
            match result {
                Ok(()) => tracing::info!(url = %url, "opened link"),
                Err(e) => tracing::warn!(url = %url, error = %e, "failed to open link"),
            }
        });
    }
    #[cfg(test)]
    {
        let _ = url;
    }
}

/// What: Cut `text` so it occupies at most `max` terminal columns.
///
/// Output:
/// - The prefix that fits; a trailing `…` marks truncation when `max > 0`.
///
/// Details:
/// - Uses display width, so wide Hangul glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate or right-pad `text` to exactly `width` display columns.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_to_width(text, width);
    let used = out.width();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}
