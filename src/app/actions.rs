//! Actions representing side effects to be executed by the session loop.
//!
//! The event handler mutates [`AppState`](super::AppState) and returns a
//! `Vec<Action>` for everything it cannot do itself: ending the session,
//! running the line editor, or touching terminal geometry. The session loop
//! in [`session`](super::session) executes them in order.

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ends the session with the given value.
    Select {
        /// Value field of the confirmed item.
        value: String,
    },

    /// Ends the session without a selection.
    Cancel,

    /// Runs the prompt-line editor, then feeds the committed text back as
    /// [`Event::FilterCommitted`](super::Event::FilterCommitted).
    EditFilter {
        /// Initial buffer contents (the current filter text).
        seed: String,
        /// Maximum number of characters the editor accepts.
        max_len: usize,
    },

    /// Re-reads the terminal geometry before the next render.
    RefreshGeometry,
}
