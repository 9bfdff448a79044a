use std::cmp::Ordering;

use crate::catalog::Product;
use crate::state::{SortDirection, SortField};

/// What: Compare two products by a numeric field in ascending order.
///
/// Inputs:
/// - `field`: Field to compare
/// - `a`, `b`: Products
///
/// Output:
/// - Ordering of `a` relative to `b`.
///
/// Details:
/// - `kcal` compares as integers; `sugar` uses IEEE total ordering so the
///   comparator stays consistent even for values that slipped past load-time checks.
#[must_use]
pub fn compare_by(field: SortField, a: &Product, b: &Product) -> Ordering {
    match field {
        SortField::Kcal => a.kcal.cmp(&b.kcal),
        SortField::Sugar => a.sugar.total_cmp(&b.sugar),
    }
}

/// What: Sort products in place by `field` and `direction`.
///
/// Inputs:
/// - `items`: Products in catalog order
/// - `field`, `direction`: Sort key and order
///
/// Output:
/// - `items` reordered.
///
/// Details:
/// - Stable in both directions: descending swaps the comparator arguments
///   instead of reversing the slice, so equal keys keep their catalog order.
pub fn sort_products(items: &mut [Product], field: SortField, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => items.sort_by(|a, b| compare_by(field, a, b)),
        SortDirection::Descending => items.sort_by(|a, b| compare_by(field, b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Company;

    fn item(title: &str, kcal: u32, sugar: f64) -> Product {
        Product {
            image: String::new(),
            title: title.to_string(),
            kcal,
            sugar,
            company: Company::Lotte,
        }
    }

    fn titles(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    /// What: Equal keys keep catalog order in both directions
    ///
    /// - Input: Two pairs of kcal ties interleaved with a unique value
    /// - Output: Tie members stay in input order ascending and descending
    fn sort_is_stable_both_directions() {
        let base = vec![
            item("a", 100, 1.0),
            item("b", 200, 1.0),
            item("c", 100, 1.0),
            item("d", 150, 1.0),
            item("e", 200, 1.0),
        ];
        let mut asc = base.clone();
        sort_products(&mut asc, SortField::Kcal, SortDirection::Ascending);
        assert_eq!(titles(&asc), vec!["a", "c", "d", "b", "e"]);

        let mut desc = base;
        sort_products(&mut desc, SortField::Kcal, SortDirection::Descending);
        assert_eq!(titles(&desc), vec!["b", "e", "d", "a", "c"]);
    }

    #[test]
    /// What: Sugar sorts numerically, not lexically
    ///
    /// - Input: 12.5, 3, 20 grams
    /// - Output: 3 < 12.5 < 20 ascending
    fn sugar_sorts_numerically() {
        let mut items = vec![item("x", 1, 12.5), item("y", 1, 3.0), item("z", 1, 20.0)];
        sort_products(&mut items, SortField::Sugar, SortDirection::Ascending);
        assert_eq!(titles(&items), vec!["y", "x", "z"]);
        sort_products(&mut items, SortField::Sugar, SortDirection::Descending);
        assert_eq!(titles(&items), vec!["z", "x", "y"]);
    }
}
