use std::sync::{OnceLock, PoisonError, RwLock};

use super::config::{
    THEME_SKELETON_CONTENT, try_load_theme_with_diagnostics, write_skeleton_if_missing,
};
use super::paths::theme_config_path;
use super::types::Theme;

/// Global theme store with live-reload capability.
static THEME_STORE: OnceLock<RwLock<Theme>> = OnceLock::new();

/// Load `theme.conf`, writing the skeleton first if needed; defaults on errors.
fn load_initial_theme() -> Theme {
    let path = theme_config_path();
    write_skeleton_if_missing(&path, THEME_SKELETON_CONTENT);
    match try_load_theme_with_diagnostics(&path) {
        Ok(t) => {
            tracing::info!(path = %path.display(), "loaded theme configuration");
            t
        }
        Err(msg) => {
            tracing::error!(
                path = %path.display(),
                error = %msg,
                "theme configuration errors; using built-in palette"
            );
            Theme::default()
        }
    }
}

/// Return the application's theme palette, loading from config on first use.
///
/// Format: key = value, one per line; values are colors as "#RRGGBB" or "R,G,B".
pub fn theme() -> Theme {
    let lock = THEME_STORE.get_or_init(|| RwLock::new(load_initial_theme()));
    *lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Reload the theme from disk without restarting the app.
/// Returns Ok(()) on success; Err(msg) with diagnostics when the file is invalid.
pub fn reload_theme() -> std::result::Result<(), String> {
    let path = theme_config_path();
    let new_theme = try_load_theme_with_diagnostics(&path)?;
    let lock = THEME_STORE.get_or_init(|| RwLock::new(load_initial_theme()));
    let mut guard = lock
        .write()
        .map_err(|_| "Failed to acquire theme store for writing".to_string())?;
    *guard = new_theme;
    tracing::info!(path = %path.display(), "reloaded theme");
    Ok(())
}
