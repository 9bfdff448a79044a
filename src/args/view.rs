//! Initial catalog and view state from settings plus command line overrides.

use crate::catalog::{Catalog, Company};
use crate::state::{SortDirection, SortField, ViewState};
use crate::theme::Settings;

use super::Args;

/// What: Merge settings and command line flags into the starting view state.
///
/// Inputs:
/// - `args`: Parsed command line
/// - `settings`: Parsed settings (sort and case defaults)
///
/// Output:
/// - `Ok(ViewState)`; `Err(message)` for an unknown manufacturer or sort field.
///
/// Details:
/// - `--sort` without `--desc` sorts ascending; `--desc` forces descending order.
/// - Manufacturers accept the display label or the config key.
pub fn build_view(args: &Args, settings: &Settings) -> Result<ViewState, String> {
    let mut view = ViewState {
        sort_field: settings.sort_field,
        sort_direction: settings.sort_direction,
        case_sensitive: settings.search_case_sensitive,
        ..ViewState::default()
    };
    if let Some(term) = &args.search {
        view.search_term.clone_from(term);
    }
    for name in &args.company {
        let company = Company::from_name(name).ok_or_else(|| {
            let known: Vec<&str> = Company::ALL.iter().map(|c| c.config_key()).collect();
            format!(
                "unknown manufacturer '{name}' (expected one of: {})",
                known.join(", ")
            )
        })?;
        view.selected_companies.insert(company);
    }
    if let Some(raw) = &args.sort {
        view.sort_field = SortField::from_config_key(raw)
            .ok_or_else(|| format!("unknown sort field '{raw}' (expected kcal or sugar)"))?;
        view.sort_direction = SortDirection::Ascending;
    }
    if args.desc {
        view.sort_direction = SortDirection::Descending;
    }
    if args.case_sensitive {
        view.case_sensitive = true;
    }
    Ok(view)
}

/// What: Load the catalog named by `--catalog`, else `catalog_path`, else the bundled one.
///
/// Output:
/// - `Err(message)` when a JSON catalog cannot be read or parsed.
pub fn load_catalog(args: &Args, settings: &Settings) -> Result<Catalog, String> {
    let path = args.catalog.as_deref().or(settings.catalog_path.as_deref());
    Catalog::load(path)
}
