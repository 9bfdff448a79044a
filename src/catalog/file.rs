//! JSON catalog files.
//!
//! The file holds an array of records:
//!
//! ```json
//! [{ "image": "img/a.webp", "title": "메로나", "kcal": "95kcal", "sugar": 14, "company": "binggrae" }]
//! ```

use std::fs;
use std::path::Path;

use super::{Catalog, RawProduct};

/// Parse a JSON array of raw records into a catalog.
pub(super) fn from_json_str(text: &str) -> Result<Catalog, String> {
    let records: Vec<RawProduct> =
        serde_json::from_str(text).map_err(|e| format!("invalid catalog JSON: {e}"))?;
    Ok(Catalog::from_raw(records))
}

/// Read and parse a JSON catalog file.
pub(super) fn from_json_path(path: &Path) -> Result<Catalog, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read catalog {}: {e}", path.display()))?;
    from_json_str(&text).map_err(|e| format!("{}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Company;

    #[test]
    /// What: JSON catalogs accept numbers and suffixed text, skip defective records
    ///
    /// - Input: Three records, one with an unknown company
    /// - Output: Two products in file order with normalized metrics
    fn json_catalog_mixed_metric_forms() {
        let text = r#"[
            {"image": "a.webp", "title": "Vanilla Bar", "kcal": "180kcal", "sugar": "12g", "company": "haitai"},
            {"title": "Mystery", "kcal": 1, "sugar": 1, "company": "acme"},
            {"image": "b.webp", "title": "Choco Bar", "kcal": 220, "sugar": 18.5, "company": "롯데"}
        ]"#;
        let catalog = from_json_str(text).unwrap();
        let titles: Vec<&str> = catalog.products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Vanilla Bar", "Choco Bar"]);
        assert_eq!(catalog.products()[0].kcal, 180);
        assert_eq!(catalog.products()[1].company, Company::Lotte);
        assert!((catalog.products()[1].sugar - 18.5).abs() < f64::EPSILON);
    }

    #[test]
    /// What: Malformed JSON and missing files are errors
    ///
    /// - Input: Non-array JSON; nonexistent path
    /// - Output: Err with a descriptive message
    fn json_catalog_errors() {
        assert!(from_json_str("{\"title\": 1}").is_err());
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = from_json_path(&missing).unwrap_err();
        assert!(err.contains("nope.json"));
    }

    #[test]
    /// What: Catalog files load from disk
    ///
    /// - Input: Temp file with one record
    /// - Output: One product
    fn json_catalog_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"title": "메로나", "kcal": "95kcal", "sugar": "14g", "company": "빙그레"}]"#,
        )
        .unwrap();
        let catalog = from_json_path(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].image, "");
    }
}
