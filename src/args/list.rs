//! `--list` and `--companies` output.

use unicode_width::UnicodeWidthStr;

use crate::catalog::{Company, Product};
use crate::util::fit_to_width;

/// Widest title column used by the text listing.
const MAX_TITLE_COLUMNS: usize = 40;

/// What: Format products as an aligned text table.
///
/// Inputs:
/// - `items`: Products in display order
///
/// Output:
/// - Header plus one line per product; a single "(no matches)" line when empty.
///
/// Details:
/// - The title column is as wide as the widest title (capped), measured in
///   display columns.
#[must_use]
pub fn format_list_text(items: &[Product]) -> String {
    if items.is_empty() {
        return "(no matches)\n".to_string();
    }
    let title_w = items
        .iter()
        .map(|p| p.title.width())
        .max()
        .unwrap_or(0)
        .clamp("TITLE".len(), MAX_TITLE_COLUMNS);
    let mut out = format!(
        "{}  {:>5}  {:>6}  MANUFACTURER\n",
        fit_to_width("TITLE", title_w),
        "KCAL",
        "SUGAR"
    );
    for p in items {
        out.push_str(&format!(
            "{}  {:>5}  {:>6.1}  {}\n",
            fit_to_width(&p.title, title_w),
            p.kcal,
            p.sugar,
            p.company.label()
        ));
    }
    out
}

/// Products as a pretty-printed JSON array.
///
/// # Errors
/// - When serialization fails.
pub fn format_list_json(items: &[Product]) -> Result<String, String> {
    serde_json::to_string_pretty(items).map_err(|e| e.to_string())
}

/// One `key  label` line per manufacturer, in display order.
#[must_use]
pub fn format_companies() -> String {
    Company::ALL
        .iter()
        .map(|c| format!("{:<12}{}\n", c.config_key(), c.label()))
        .collect()
}

/// What: Print the visible list to stdout.
///
/// Output:
/// - Process exit code: 0 on success, 1 when JSON serialization fails.
pub fn handle_list(items: &[Product], json: bool) -> i32 {
    if json {
        match format_list_json(items) {
            Ok(s) => {
                println!("{s}");
                0
            }
            Err(e) => {
                eprintln!("scoops: {e}");
                1
            }
        }
    } else {
        print!("{}", format_list_text(items));
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, kcal: u32, sugar: f64, company: Company) -> Product {
        Product {
            image: String::new(),
            title: title.to_string(),
            kcal,
            sugar,
            company,
        }
    }

    #[test]
    /// What: Text listing aligns Hangul and ASCII titles
    ///
    /// - Input: "메로나" and "Choco Bar"
    /// - Output: Header plus two rows of equal width before the manufacturer column
    fn text_listing_aligned() {
        let items = [
            product("메로나", 95, 14.0, Company::Binggrae),
            product("Choco Bar", 180, 12.5, Company::Lotte),
        ];
        let text = format_list_text(&items);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("TITLE"));
        assert_eq!(
            lines[1].width() - "빙그레".width(),
            lines[2].width() - "롯데".width()
        );
        assert!(lines[1].contains("   95    14.0  빙그레"));
        assert!(lines[2].contains("  180    12.5  롯데"));
    }

    #[test]
    /// What: Empty listings say so
    ///
    /// - Input: No products
    /// - Output: "(no matches)"
    fn empty_listing() {
        assert_eq!(format_list_text(&[]), "(no matches)\n");
        assert_eq!(format_list_json(&[]).expect("json"), "[]");
    }

    #[test]
    /// What: JSON listing carries numeric fields and snake_case manufacturers
    ///
    /// - Input: One Häagen-Dazs product
    /// - Output: Parsed JSON with kcal 250 and company "haagen_dazs"
    fn json_listing_fields() {
        let items = [product("바닐라 파인트", 250, 21.5, Company::HaagenDazs)];
        let json = format_list_json(&items).expect("json");
        let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(v[0]["kcal"], 250);
        assert_eq!(v[0]["sugar"], 21.5);
        assert_eq!(v[0]["company"], "haagen_dazs");
    }

    #[test]
    /// What: Manufacturer listing follows display order
    ///
    /// - Input: None
    /// - Output: Five lines starting with haitai and ending with haagen_dazs
    fn companies_listing() {
        let text = format_companies();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), Company::COUNT);
        assert!(lines[0].starts_with("haitai"));
        assert!(lines[0].ends_with("해태"));
        assert!(lines[4].starts_with("haagen_dazs"));
    }
}
