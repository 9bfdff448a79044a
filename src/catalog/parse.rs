//! Normalization of raw catalog records into [`Product`] values.

use super::data::BundledRecord;
use super::{Company, Product};

/// A nutrition metric as it appears in source data: a bare number or text
/// with a unit suffix.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum RawMetric {
    /// Plain JSON number.
    Number(f64),
    /// Text such as `"180kcal"` or `"12.5g"`.
    Text(String),
}

/// Un-normalized catalog record, as bundled or read from a JSON file.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RawProduct {
    /// Opaque image reference.
    #[serde(default)]
    pub image: String,
    /// Display title.
    pub title: String,
    /// Energy, possibly suffixed with `kcal`.
    pub kcal: RawMetric,
    /// Sugar, possibly suffixed with `g`.
    pub sugar: RawMetric,
    /// Manufacturer label or key.
    pub company: String,
}

impl From<&BundledRecord> for RawProduct {
    fn from(r: &BundledRecord) -> Self {
        Self {
            image: r.image.to_string(),
            title: r.title.to_string(),
            kcal: RawMetric::Text(r.kcal.to_string()),
            sugar: RawMetric::Text(r.sugar.to_string()),
            company: r.company.to_string(),
        }
    }
}

impl RawProduct {
    /// What: Convert into a [`Product`] with numeric metrics.
    ///
    /// Inputs:
    /// - `self`: Raw record.
    ///
    /// Output:
    /// - `Ok(Product)`, or `Err` naming the field that failed.
    pub fn normalize(self) -> Result<Product, String> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err("empty title".to_string());
        }
        let kcal = match &self.kcal {
            RawMetric::Number(n) => kcal_from_number(*n),
            RawMetric::Text(t) => parse_kcal(t),
        }
        .ok_or_else(|| format!("{title}: invalid kcal {:?}", self.kcal))?;
        let sugar = match &self.sugar {
            RawMetric::Number(n) => sugar_from_number(*n),
            RawMetric::Text(t) => parse_sugar(t),
        }
        .ok_or_else(|| format!("{title}: invalid sugar {:?}", self.sugar))?;
        let company = Company::from_name(&self.company)
            .ok_or_else(|| format!("{title}: unknown company {:?}", self.company))?;
        Ok(Product {
            image: self.image,
            title,
            kcal,
            sugar,
            company,
        })
    }
}

/// Strip a trailing unit (case-insensitive) and surrounding whitespace.
fn strip_unit<'a>(text: &'a str, unit: &str) -> &'a str {
    let t = text.trim();
    if t.len() >= unit.len() {
        let split = t.len() - unit.len();
        if t.is_char_boundary(split) && t[split..].eq_ignore_ascii_case(unit) {
            return t[..split].trim_end();
        }
    }
    t
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn kcal_from_number(n: f64) -> Option<u32> {
    if n.is_finite() && n >= 0.0 && n <= f64::from(u32::MAX) {
        Some(n.trunc() as u32)
    } else {
        None
    }
}

/// Non-negative finite grams; `-0` becomes `0` so equal amounts compare equal.
fn sugar_from_number(n: f64) -> Option<f64> {
    (n.is_finite() && n >= 0.0).then_some(n + 0.0)
}

/// What: Parse an energy value such as `"180kcal"`, `"180 kcal"` or `"180"`.
///
/// Inputs:
/// - `text`: Raw metric text.
///
/// Output:
/// - Whole kilocalories; fractional input is truncated. `None` when not a
///   non-negative number.
#[must_use]
pub fn parse_kcal(text: &str) -> Option<u32> {
    let num = strip_unit(text, "kcal");
    if let Ok(v) = num.parse::<u32>() {
        return Some(v);
    }
    num.parse::<f64>().ok().and_then(kcal_from_number)
}

/// What: Parse a sugar value such as `"12.5g"`, `"12 g"` or `"12"`.
///
/// Inputs:
/// - `text`: Raw metric text.
///
/// Output:
/// - Grams as `f64`; `None` when not a finite non-negative number.
#[must_use]
pub fn parse_sugar(text: &str) -> Option<f64> {
    strip_unit(text, "g")
        .parse::<f64>()
        .ok()
        .and_then(sugar_from_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Unit-suffixed metrics parse into numbers
    ///
    /// - Input: Suffixed, spaced, bare, fractional and malformed values
    /// - Output: Numeric values; None for garbage and negatives
    fn metric_text_parsing() {
        assert_eq!(parse_kcal("180kcal"), Some(180));
        assert_eq!(parse_kcal(" 95 KCAL "), Some(95));
        assert_eq!(parse_kcal("210"), Some(210));
        assert_eq!(parse_kcal("99.9kcal"), Some(99));
        assert_eq!(parse_kcal("kcal"), None);
        assert_eq!(parse_kcal("-5kcal"), None);

        assert_eq!(parse_sugar("12g"), Some(12.0));
        assert_eq!(parse_sugar("2.5 g"), Some(2.5));
        assert_eq!(parse_sugar("7"), Some(7.0));
        assert_eq!(parse_sugar("twelve"), None);
        assert_eq!(parse_sugar("NaN"), None);
    }

    #[test]
    /// What: Negative zero sugar normalizes to positive zero
    ///
    /// - Input: "-0g", "0g" and a JSON-style `-0` number
    /// - Output: All equal under `total_cmp` and not sign-negative
    fn sugar_negative_zero_normalizes() {
        let neg = parse_sugar("-0g").expect("zero parses");
        let pos = parse_sugar("0g").expect("zero parses");
        assert!(!neg.is_sign_negative());
        assert!(neg.total_cmp(&pos).is_eq());
        let num = sugar_from_number(-0.0).expect("zero accepted");
        assert!(!num.is_sign_negative());
    }

    #[test]
    /// What: Normalization reports the offending field
    ///
    /// - Input: Records with bad kcal, unknown company, blank title
    /// - Output: Errors mentioning the problem; valid record converts
    fn normalize_reports_defects() {
        let ok = RawProduct {
            image: "images/a.webp".into(),
            title: " 메로나 ".into(),
            kcal: RawMetric::Text("95kcal".into()),
            sugar: RawMetric::Number(14.0),
            company: "빙그레".into(),
        };
        let p = ok.clone().normalize().unwrap();
        assert_eq!(p.title, "메로나");
        assert_eq!(p.kcal, 95);
        assert!((p.sugar - 14.0).abs() < f64::EPSILON);
        assert_eq!(p.company, Company::Binggrae);

        let bad_kcal = RawProduct {
            kcal: RawMetric::Text("lots".into()),
            ..ok.clone()
        };
        assert!(bad_kcal.normalize().unwrap_err().contains("kcal"));

        let bad_company = RawProduct {
            company: "nestle".into(),
            ..ok.clone()
        };
        assert!(bad_company.normalize().unwrap_err().contains("company"));

        let blank = RawProduct {
            title: "   ".into(),
            ..ok
        };
        assert!(blank.normalize().is_err());
    }
}
