use std::io::Stdout;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use super::channels::Channels;
use super::tick_handler::handle_tick;
use crate::state::AppState;
use crate::ui::ui;

/// What: Drive rendering and event handling until the user quits.
///
/// Inputs:
/// - `terminal`: Terminal to draw into; `None` in headless mode
/// - `app`: Application state
/// - `channels`: Event and tick receivers
///
/// Details:
/// - Redraws after terminal events and after ticks that changed the list.
/// - Returns when the exit binding is pressed or every sender is gone.
pub async fn run_event_loop(
    mut terminal: Option<&mut Terminal<CrosstermBackend<Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    let mut dirty = true;
    loop {
        if dirty {
            if let Some(t) = terminal.as_deref_mut()
                && let Err(e) = t.draw(|f| ui(f, app))
            {
                tracing::warn!(error = %e, "draw failed");
            }
            dirty = false;
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, app) {
                    break;
                }
                dirty = true;
            }
            Some(()) = channels.tick_rx.recv() => {
                // Pending-search indicator in the search title changes too.
                let pending_before = app.controller.pending_search().is_some();
                dirty = handle_tick(app) || pending_before != app.controller.pending_search().is_some();
            }
            else => break,
        }
    }
}
