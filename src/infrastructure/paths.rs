//! Log file location resolution.
//!
//! Paths are resolved from an explicit environment map so callers (and tests)
//! never depend on the process environment directly.

use std::collections::BTreeMap;
use std::path::PathBuf;

const APP_DIR: &str = "tabpick";
const LOG_FILE_NAME: &str = "tabpick.log";

/// Returns the default log file path.
///
/// Resolution order:
/// 1. `$XDG_STATE_HOME/tabpick/tabpick.log`
/// 2. `$HOME/.local/state/tabpick/tabpick.log`
/// 3. `<temp dir>/tabpick/tabpick.log`
///
/// Empty variables are treated as unset.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use std::path::PathBuf;
/// use tabpick::infrastructure::default_log_file;
///
/// let mut env = BTreeMap::new();
/// env.insert("HOME".to_string(), "/home/me".to_string());
/// assert_eq!(
///     default_log_file(&env),
///     PathBuf::from("/home/me/.local/state/tabpick/tabpick.log")
/// );
/// ```
#[must_use]
pub fn default_log_file(env: &BTreeMap<String, String>) -> PathBuf {
    state_dir(env).join(APP_DIR).join(LOG_FILE_NAME)
}

fn state_dir(env: &BTreeMap<String, String>) -> PathBuf {
    let non_empty = |key: &str| env.get(key).filter(|v| !v.is_empty());

    if let Some(xdg) = non_empty("XDG_STATE_HOME") {
        return PathBuf::from(xdg);
    }
    if let Some(home) = non_empty("HOME") {
        return PathBuf::from(home).join(".local").join("state");
    }
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn xdg_state_home_wins() {
        let env = env(&[("XDG_STATE_HOME", "/state"), ("HOME", "/home/me")]);
        assert_eq!(
            default_log_file(&env),
            PathBuf::from("/state/tabpick/tabpick.log")
        );
    }

    #[test]
    fn empty_xdg_falls_back_to_home() {
        let env = env(&[("XDG_STATE_HOME", ""), ("HOME", "/home/me")]);
        assert_eq!(
            default_log_file(&env),
            PathBuf::from("/home/me/.local/state/tabpick/tabpick.log")
        );
    }

    #[test]
    fn no_home_uses_temp_dir() {
        let path = default_log_file(&BTreeMap::new());
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("tabpick/tabpick.log"));
    }
}
