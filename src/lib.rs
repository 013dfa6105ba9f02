//! Tabpick: an interactive terminal menu for tab-separated choices.
//!
//! Tabpick reads `value<TAB>display` records from standard input, shows the
//! display texts as a scrollable menu on the controlling terminal, and writes
//! the value of the confirmed entry to standard output. It provides:
//! - Vi-style and arrow-key navigation with half-page scrolling
//! - Case-insensitive regular expression filtering over display texts
//! - A toggle between showing display texts and the raw values
//! - Clean terminal restoration on every exit path

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← Entry point
//! │  - Load stdin, open tty, print selection            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key mapping and event handling                   │
//! │  - Action dispatching (session loop)                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌─────────────────────────┐   ┌─────────────────────────┐
//! │ UI Layer (ui/)          │   │ Domain Layer (domain/)  │
//! │ - Surface trait         │   │ - Item store            │
//! │ - crossterm /dev/tty    │   │ - Regex filter          │
//! │ - Viewport + renderer   │   │ - Error types           │
//! └─────────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │  ← Optional
//! │  - Log file location (infrastructure/)              │
//! │  - File-based tracing (observability/)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Items, filtering, and errors
//! - [`infrastructure`]: Environment-derived paths
//! - [`ui`]: Terminal surface and rendering
//! - [`observability`]: Rotating-file tracing
//!
//! # Configuration
//!
//! All settings come from environment variables, see [`Config`]:
//!
//! ```sh
//! TABPICK_LOG=debug TABPICK_LOG_FILE=/tmp/tabpick.log tabpick < choices.tsv
//! ```
//!
//! # Exit Status
//!
//! | Status | Meaning                                       |
//! |--------|-----------------------------------------------|
//! | 0      | An item was confirmed; its value is on stdout |
//! | 1      | The user cancelled                            |
//! | 2      | The terminal could not be used                |
//! | 5      | Standard input could not be read or parsed    |
//!
//! # Examples
//!
//! ```rust
//! use tabpick::{handle_event, initialize, Action, Config, Event};
//! use tabpick::domain::ItemStore;
//!
//! let store = ItemStore::from_reader("a\tAlpha\nb\tBeta\n".as_bytes())?;
//! let mut state = initialize(store, &Config::default());
//!
//! handle_event(&mut state, &Event::MoveDown);
//! let (_, actions) = handle_event(&mut state, &Event::Confirm);
//! assert_eq!(actions, vec![Action::Select { value: "b".to_string() }]);
//! # Ok::<(), tabpick::PickerError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, run_session, Action, AppState, DisplayMode, Event, InputMode};
pub use domain::{Item, ItemStore, PickerError, Result};

use app::state::DEFAULT_FILTER_MAX_LEN;
use domain::error::{EXIT_CANCELLED, EXIT_TERMINAL_FAILURE};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable holding the tracing filter directive.
pub const ENV_LOG: &str = "TABPICK_LOG";
/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "TABPICK_LOG_FILE";
/// Environment variable overriding the filter length limit.
pub const ENV_FILTER_MAX: &str = "TABPICK_FILTER_MAX";

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `EnvFilter` directive for the log file (`debug`, `tabpick=trace`, ...).
    ///
    /// `None` disables logging entirely. Default: `None`
    pub log_level: Option<String>,

    /// Where log output is appended when logging is enabled.
    ///
    /// Default: see [`infrastructure::default_log_file`]
    pub log_file: PathBuf,

    /// Maximum length of the filter text, in characters. Default: 2048
    pub filter_max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env_map(&BTreeMap::new())
    }
}

impl Config {
    /// Parses configuration from an environment map.
    ///
    /// # Parameters
    ///
    /// * `env` - Variable name to value map
    ///
    /// # Parsing Rules
    ///
    /// - `TABPICK_LOG`: trimmed; empty → `None`
    /// - `TABPICK_LOG_FILE`: non-empty → `PathBuf`, else the default location
    /// - `TABPICK_FILTER_MAX`: positive integer, else 2048
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tabpick::Config;
    ///
    /// let mut env = BTreeMap::new();
    /// env.insert("TABPICK_LOG".to_string(), "debug".to_string());
    /// env.insert("TABPICK_FILTER_MAX".to_string(), "64".to_string());
    ///
    /// let config = Config::from_env_map(&env);
    /// assert_eq!(config.log_level.as_deref(), Some("debug"));
    /// assert_eq!(config.filter_max_len, 64);
    /// ```
    #[must_use]
    pub fn from_env_map(env: &BTreeMap<String, String>) -> Self {
        let log_level = env
            .get(ENV_LOG)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from);

        let log_file = env
            .get(ENV_LOG_FILE)
            .filter(|s| !s.is_empty())
            .map_or_else(|| infrastructure::default_log_file(env), PathBuf::from);

        let filter_max_len = env
            .get(ENV_FILTER_MAX)
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_FILTER_MAX_LEN);

        Self {
            log_level,
            log_file,
            filter_max_len,
        }
    }

    /// Reads configuration from the process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_env() -> Self {
        let env: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::from_env_map(&env)
    }
}

/// Builds the initial session state for a loaded store.
///
/// The returned state is browsing, unfiltered, with the cursor on the first
/// item and the configured filter length limit applied.
#[must_use]
pub fn initialize(store: ItemStore, config: &Config) -> AppState {
    tracing::debug!(
        items = store.len(),
        filter_max_len = config.filter_max_len,
        "initializing picker"
    );
    AppState::new(store).with_filter_max_len(config.filter_max_len)
}

/// Reports how a run ended and returns the process exit status.
///
/// # Parameters
///
/// * `outcome` - Result of loading the items and running the session
/// * `out` - Receives the selected value, newline-terminated
/// * `err` - Receives a one-line diagnostic for failures
///
/// # Returns
///
/// - `0` after writing the selected value to `out`
/// - `1` when the user cancelled; nothing is written
/// - [`PickerError::exit_code`] for failures (5 for input, 2 for terminal)
/// - `2` when the selection cannot be written to `out`
///
/// # Example
///
/// ```rust
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let status = tabpick::report_outcome(Ok(Some("b".to_string())), &mut out, &mut err);
/// assert_eq!((status, out.as_slice()), (0, &b"b\n"[..]));
/// ```
pub fn report_outcome<O: Write, E: Write>(
    outcome: Result<Option<String>>,
    out: &mut O,
    err: &mut E,
) -> u8 {
    match outcome {
        Ok(Some(value)) => match writeln!(out, "{value}").and_then(|()| out.flush()) {
            Ok(()) => 0,
            Err(e) => {
                tracing::error!(error = %e, "failed to write selection");
                let _ = writeln!(err, "tabpick: failed to write selection: {e}");
                EXIT_TERMINAL_FAILURE
            }
        },
        Ok(None) => {
            tracing::debug!("no selection made");
            EXIT_CANCELLED
        }
        Err(e) => {
            tracing::error!(error = %e, "picker failed");
            let _ = writeln!(err, "tabpick: {e}");
            e.exit_code()
        }
    }
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
    fn defaults_without_variables() {
        let config = Config::from_env_map(&env(&[("HOME", "/home/me")]));
        assert_eq!(config.log_level, None);
        assert_eq!(config.filter_max_len, DEFAULT_FILTER_MAX_LEN);
        assert_eq!(
            config.log_file,
            PathBuf::from("/home/me/.local/state/tabpick/tabpick.log")
        );
    }

    #[test]
    fn explicit_log_file_overrides_default() {
        let config = Config::from_env_map(&env(&[
            ("TABPICK_LOG", " info "),
            ("TABPICK_LOG_FILE", "/tmp/x.log"),
        ]));
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn blank_log_level_disables_logging() {
        let config = Config::from_env_map(&env(&[("TABPICK_LOG", "  ")]));
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn invalid_filter_max_falls_back() {
        for raw in ["0", "-3", "lots", ""] {
            let config = Config::from_env_map(&env(&[("TABPICK_FILTER_MAX", raw)]));
            assert_eq!(config.filter_max_len, DEFAULT_FILTER_MAX_LEN, "{raw:?}");
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn report(outcome: Result<Option<String>>) -> (u8, String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = report_outcome(outcome, &mut out, &mut err);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn selection_prints_value_and_succeeds() {
        assert_eq!(
            report(Ok(Some("a".to_string()))),
            (0, "a\n".to_string(), String::new())
        );
    }

    #[test]
    fn cancel_exits_one_with_no_output() {
        assert_eq!(report(Ok(None)), (1, String::new(), String::new()));
    }

    #[test]
    fn load_failure_exits_five_with_diagnostic() {
        let malformed = ItemStore::from_reader("noTabHere\n".as_bytes()).map(|_| None);
        let (status, out, err) = report(malformed);
        assert_eq!(status, 5);
        assert!(out.is_empty());
        assert!(err.starts_with("tabpick: malformed record on line 1"));
    }

    #[test]
    fn terminal_failure_exits_two() {
        let broken = Err(PickerError::Terminal(std::io::ErrorKind::NotFound.into()));
        let (status, out, err) = report(broken);
        assert_eq!((status, out.is_empty()), (2, true));
        assert!(err.starts_with("tabpick: terminal error"));
    }

    #[test]
    fn unwritable_stdout_exits_two() {
        let mut err = Vec::new();
        let status = report_outcome(Ok(Some("a".to_string())), &mut BrokenPipe, &mut err);
        assert_eq!(status, 2);
        assert!(!err.is_empty());
    }

    #[test]
    fn initialize_applies_filter_limit() {
        let config = Config::from_env_map(&env(&[("TABPICK_FILTER_MAX", "16")]));
        let state = initialize(ItemStore::default(), &config);
        assert_eq!(state.filter_max_len(), 16);
        assert_eq!(state.cursor(), 0);
    }
}
