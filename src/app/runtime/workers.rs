use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Interval between ticks; bounds how late a debounced search can apply.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// What: Spawn the OS thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel to forward events on
/// - `cancelled`: Flag checked between polls to stop the thread
///
/// Details:
/// - Polls with a 50 ms timeout so the cancellation flag is seen promptly.
/// - Exits when the receiving side is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    // ignore transient read errors and continue
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "terminal poll failed"),
            }
        }
        tracing::debug!("input thread stopped");
    });
}

/// What: Spawn the tick task that drives debounced updates.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events
///
/// Details:
/// - Sends one tick every [`TICK_INTERVAL`] until the receiver is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    /// What: Tick worker delivers ticks and stops once the receiver is gone
    ///
    /// - Input: Spawned worker; receive two ticks; drop receiver
    /// - Output: Both ticks arrive
    async fn tick_worker_sends_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_tick_worker(tx);
        for _ in 0..2 {
            tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("tick in time")
                .expect("channel open");
        }
        drop(rx);
    }
}
