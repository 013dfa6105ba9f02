//! Input and display mode state types.
//!
//! # State Machine
//!
//! The picker is in one of two input modes while running:
//! - **Browsing**: navigation keys move the cursor, confirm/cancel terminate
//! - **`FilterEditing`**: the prompt line editor owns the keyboard
//!
//! Termination (selected or cancelled) is not a mode; it is reported through
//! [`Action`](super::Action)s and ends the session.
//!
//! # Example
//!
//! ```rust
//! use tabpick::app::{DisplayMode, InputMode};
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Browsing);
//! assert_eq!(DisplayMode::Display.toggled(), DisplayMode::Value);
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation mode.
    #[default]
    Browsing,

    /// The user is typing a new filter pattern on the prompt line.
    FilterEditing,
}

/// Which field of each item the menu shows.
///
/// Purely cosmetic: filtering always uses the display text and selection
/// always returns the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Show the display field.
    #[default]
    Display,

    /// Show the value field prefixed with [`VALUE_MARKER`].
    Value,
}

/// Marker drawn before values in [`DisplayMode::Value`].
pub const VALUE_MARKER: char = '>';

impl DisplayMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Display => Self::Value,
            Self::Value => Self::Display,
        }
    }
}
