use ratatui::{Terminal, backend::CrosstermBackend};

use crate::catalog::Catalog;
use crate::state::ViewState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
pub mod init;
mod tick_handler;
mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use init::initialize_app_state;
use workers::{spawn_event_thread, spawn_tick_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the TUI end-to-end: set up the terminal, spawn the input thread
/// and tick task, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `catalog`: Loaded catalog
/// - `view`: Initial view state
/// - `settings`: Parsed settings
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal errors.
///
/// Details:
/// - `SCOOPS_TEST_HEADLESS=1` skips terminal setup and the input thread.
pub async fn run(catalog: Catalog, view: ViewState, settings: Settings) -> Result<()> {
    let headless = std::env::var("SCOOPS_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = initialize_app_state(catalog, view, &settings);
    let mut channels = Channels::new();
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    run_event_loop(terminal.as_mut(), &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("ui exited");
    Ok(())
}
