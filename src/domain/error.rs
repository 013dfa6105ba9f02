//! Error types for the picker.
//!
//! This module defines the centralized error type [`PickerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use std::fmt;
use thiserror::Error;

/// Exit status after the user cancels without choosing.
pub const EXIT_CANCELLED: u8 = 1;

/// Exit status used when the input list cannot be loaded.
pub const EXIT_LOAD_FAILURE: u8 = 5;

/// Exit status used when the terminal session fails.
pub const EXIT_TERMINAL_FAILURE: u8 = 2;

/// Why a non-blank input line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDefect {
    /// The line has no tab between value and display.
    MissingSeparator,
    /// Nothing precedes the first tab.
    EmptyValue,
    /// Nothing follows the first tab.
    EmptyDisplay,
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingSeparator => "missing tab separator",
            Self::EmptyValue => "empty value field",
            Self::EmptyDisplay => "empty display field",
        };
        f.write_str(text)
    }
}

/// The main error type for picker operations.
///
/// Load-time variants ([`SourceRead`](Self::SourceRead),
/// [`MalformedRecord`](Self::MalformedRecord)) are fatal and surface before any
/// terminal state exists. [`Pattern`](Self::Pattern) is recoverable and never
/// leaves the interaction state machine.
///
/// # Examples
///
/// ```
/// use tabpick::domain::{PickerError, RecordDefect};
///
/// let err = PickerError::MalformedRecord { line: 3, defect: RecordDefect::MissingSeparator };
/// assert_eq!(err.to_string(), "malformed record on line 3: missing tab separator");
/// assert_eq!(err.exit_code(), 5);
/// ```
#[derive(Debug, Error)]
pub enum PickerError {
    /// Reading the input stream failed.
    ///
    /// Kept apart from [`Terminal`](Self::Terminal) so that a broken pipe on
    /// stdin is distinguishable from a broken tty.
    #[error("failed to read input: {0}")]
    SourceRead(#[source] std::io::Error),

    /// A non-blank input line is not a valid `value<TAB>display` record.
    #[error("malformed record on line {line}: {defect}")]
    MalformedRecord {
        /// 1-based line number in the input stream.
        line: usize,
        /// What is wrong with the line.
        defect: RecordDefect,
    },

    /// The filter text does not compile as a regular expression.
    #[error("invalid pattern {pattern:?}: {message}")]
    Pattern {
        /// Text the user committed.
        pattern: String,
        /// One-line diagnostic from the regex engine.
        message: String,
    },

    /// Terminal acquisition, drawing, or key input failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl PickerError {
    /// Process exit status for errors that reach `main`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SourceRead(_) | Self::MalformedRecord { .. } => EXIT_LOAD_FAILURE,
            Self::Pattern { .. } | Self::Terminal(_) => EXIT_TERMINAL_FAILURE,
        }
    }
}

/// A specialized `Result` type for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
