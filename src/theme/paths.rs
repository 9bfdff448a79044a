use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Directory name used under the user's config base.
const APP_DIR: &str = "scoops";

/// Config directory chosen on the command line, if any.
static CONFIG_DIR_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// What: Pin the configuration directory for the rest of the process.
///
/// Inputs:
/// - `dir`: Directory to use instead of `$HOME/.config/scoops`.
///
/// Output:
/// - `Err(dir)` when an override was already installed.
///
/// Details:
/// - Must run before the first call to [`config_dir`] to take effect everywhere.
pub fn set_config_dir_override(dir: PathBuf) -> Result<(), PathBuf> {
    CONFIG_DIR_OVERRIDE.set(dir)
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/scoops`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for scoops (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = CONFIG_DIR_OVERRIDE.get() {
        let _ = std::fs::create_dir_all(dir);
        return dir.clone();
    }
    // Prefer HOME ~/.config/scoops first
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/scoops/logs" (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Location of `settings.conf`.
pub(crate) fn settings_config_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// Location of `theme.conf`.
pub(crate) fn theme_config_path() -> PathBuf {
    config_dir().join("theme.conf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Config and logs directories live under HOME and get created
    ///
    /// - Input: HOME pointed at a temp directory
    /// - Output: `<home>/.config/scoops` and its `logs` child exist
    fn config_dir_under_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let tmp = tempfile::tempdir().expect("tempdir");
        let orig_home = env::var_os("HOME");
        unsafe { env::set_var("HOME", tmp.path()) };

        let expected = tmp.path().join(".config").join("scoops");
        if CONFIG_DIR_OVERRIDE.get().is_none() {
            assert_eq!(config_dir(), expected);
            assert!(expected.is_dir());
            assert!(logs_dir().is_dir());
            assert_eq!(settings_config_path(), expected.join("settings.conf"));
        }

        unsafe {
            if let Some(v) = orig_home {
                env::set_var("HOME", v);
            } else {
                env::remove_var("HOME");
            }
        }
    }
}
