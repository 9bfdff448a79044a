use crate::catalog::{Catalog, Product};
use crate::logic::sort::sort_products;
use crate::state::ViewState;

/// What: Check whether `title` contains `needle`.
///
/// Inputs:
/// - `title`: Product title
/// - `needle`: Search term, already lowercased when `case_sensitive` is false
/// - `case_sensitive`: Compare as-is when `true`
///
/// Output:
/// - `true` on a substring match; always `true` for an empty needle.
#[must_use]
pub fn title_matches(title: &str, needle: &str, case_sensitive: bool) -> bool {
    if needle.is_empty() {
        return true;
    }
    if case_sensitive {
        title.contains(needle)
    } else {
        title.to_lowercase().contains(needle)
    }
}

/// What: Derive the visible product list from the catalog and a view state.
///
/// Inputs:
/// - `catalog`: Full product catalog
/// - `view`: Search term, manufacturer selection, sort field and direction
///
/// Output:
/// - Matching products, sorted; possibly empty.
///
/// Details:
/// - Pure: the catalog is never modified and the same inputs always give the same output.
/// - Manufacturer filter first (empty selection keeps everything), then the title
///   substring filter, then a stable numeric sort.
#[must_use]
pub fn compute_visible_list(catalog: &Catalog, view: &ViewState) -> Vec<Product> {
    let needle = if view.case_sensitive {
        view.search_term.clone()
    } else {
        view.search_term.to_lowercase()
    };
    let mut visible: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| view.shows_company(p.company))
        .filter(|p| title_matches(&p.title, &needle, view.case_sensitive))
        .cloned()
        .collect();
    sort_products(&mut visible, view.sort_field, view.sort_direction);
    visible
}
