//! Debounced search through `CatalogController` driven by a manual clock.

use std::sync::Arc;
use std::time::Duration;

use scoops::catalog::{Catalog, Company};
use scoops::logic::{CatalogController, ManualClock};
use scoops::state::ViewState;

fn controller(clock: &Arc<ManualClock>) -> CatalogController {
    CatalogController::with_clock(
        Arc::new(Catalog::bundled()),
        ViewState::default(),
        Duration::from_millis(300),
        clock.clone(),
    )
}

#[test]
/// What: A typing burst applies only the last value after a full quiet window
///
/// - Input: "메", "메로", "메로나" typed 100 ms apart; ticks along the way
/// - Output: No change until 300 ms after the last keystroke; then "메로나"
fn burst_collapses_to_last_value() {
    let clock = Arc::new(ManualClock::new());
    let mut c = controller(&clock);
    let all = c.visible().len();

    for term in ["메", "메로", "메로나"] {
        c.set_search_term(term);
        clock.advance(Duration::from_millis(100));
        assert!(!c.tick());
    }
    assert_eq!(c.visible().len(), all);
    clock.advance(Duration::from_millis(199));
    assert!(!c.tick());
    clock.advance(Duration::from_millis(1));
    assert!(c.tick());
    assert_eq!(c.view().search_term, "메로나");
    assert!(c.visible().iter().all(|p| p.title.contains("메로나")));
    assert!(!c.tick());
}

#[test]
/// What: Toggles and sorts apply immediately while a search is pending
///
/// - Input: Pending term, then toggle 빙그레
/// - Output: List filtered at once; term applied later on tick
fn immediate_ops_do_not_wait() {
    let clock = Arc::new(ManualClock::new());
    let mut c = controller(&clock);
    c.set_search_term("바");
    assert!(c.toggle_company(Company::Binggrae));
    assert!(c.visible().iter().all(|p| p.company == Company::Binggrae));
    assert!(c.view().search_term.is_empty());
    clock.advance(Duration::from_millis(300));
    c.tick();
    assert_eq!(c.view().search_term, "바");
}

#[test]
/// What: Clearing filters cancels the pending search
///
/// - Input: Pending term, clear filters, full window elapses
/// - Output: Term stays empty; nothing pending
fn clear_cancels_pending() {
    let clock = Arc::new(ManualClock::new());
    let mut c = controller(&clock);
    c.set_search_term("메로나");
    c.clear_filters();
    assert!(c.pending_search().is_none());
    clock.advance(Duration::from_secs(1));
    assert!(!c.tick());
    assert!(c.view().search_term.is_empty());
}
