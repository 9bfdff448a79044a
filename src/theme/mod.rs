//! Theme, settings and key bindings.
//!
//! Both config files live in the scoops config directory and use plain
//! `key = value` lines.

/// Skeleton files and theme parsing.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Theme store and caching.
mod store;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir, set_config_dir_override};
pub use settings::{load_settings_from, parse_settings, settings};
pub use store::{reload_theme, theme};
pub use types::{KeyChord, KeyMap, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
