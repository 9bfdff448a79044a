use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events come from the input thread, ticks from the tick task.
pub struct Channels {
    /// Sender handed to the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on shutdown so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Sender handed to the tick task.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Periodic ticks consumed by the event loop.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// Create all channel pairs.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            tick_tx,
            tick_rx,
        }
    }
}
