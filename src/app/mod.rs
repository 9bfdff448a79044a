//! TUI application: terminal setup, channels, workers and the event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::init::initialize_app_state;
pub use runtime::run;
