//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns decoded user input into
//! state changes and action sequences. It is the only place where
//! [`AppState`] is mutated during a session.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Keys arrive from the surface and are mapped to [`Event`]s by the keymap
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the session loop to execute
//!
//! # Event Types
//!
//! - **Navigation**: `MoveDown`, `MoveUp`, `MoveFirst`, `MoveLast`, `PageDown`, `PageUp`
//! - **Termination**: `Confirm`, `Cancel`
//! - **Display**: `ToggleDisplay`, `Resize`
//! - **Filtering**: `BeginFilter`, `FilterCommitted`
//!
//! # Example
//!
//! ```rust
//! use tabpick::app::{handle_event, Action, AppState, Event};
//! use tabpick::domain::ItemStore;
//!
//! let store = ItemStore::from_reader("a\tAlpha\n".as_bytes()).unwrap();
//! let mut state = AppState::new(store);
//! let (_, actions) = handle_event(&mut state, &Event::Confirm);
//! assert_eq!(actions, vec![Action::Select { value: "a".to_string() }]);
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};

/// Events produced from user input.
///
/// Each event is processed to completion before the next key is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Cursor down one item (clamped).
    MoveDown,
    /// Cursor up one item (clamped).
    MoveUp,
    /// Cursor to the first item.
    MoveFirst,
    /// Cursor to the last item.
    MoveLast,
    /// Cursor down half of the previously drawn rows.
    PageDown,
    /// Cursor up half of the previously drawn rows.
    PageUp,
    /// Select the item under the cursor.
    Confirm,
    /// Quit without a selection.
    Cancel,
    /// Switch between showing display text and values.
    ToggleDisplay,
    /// Open the filter prompt.
    BeginFilter,
    /// The filter prompt returned this line.
    FilterCommitted(String),
    /// The terminal was resized.
    Resize,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `true` when the visible frame
/// may have changed. Actions are executed in order by the session loop.
///
/// # Mode Rules
///
/// While in [`InputMode::FilterEditing`] only [`Event::FilterCommitted`] is
/// accepted; in [`InputMode::Browsing`] a stray `FilterCommitted` is ignored.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match (state.input_mode(), event) {
        (InputMode::FilterEditing, Event::FilterCommitted(text)) => {
            if let Err(e) = state.commit_filter(text.clone()) {
                tracing::debug!(error = %e, "filter rejected, keeping previous view");
            }
            (true, vec![])
        }
        (InputMode::FilterEditing, _) | (InputMode::Browsing, Event::FilterCommitted(_)) => {
            tracing::debug!("event not valid in current mode");
            (false, vec![])
        }
        (InputMode::Browsing, event) => handle_browsing(state, event),
    }
}

fn handle_browsing(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::MoveDown => {
            state.move_cursor_down();
            (true, vec![])
        }
        Event::MoveUp => {
            state.move_cursor_up();
            (true, vec![])
        }
        Event::MoveFirst => {
            state.move_cursor_first();
            (true, vec![])
        }
        Event::MoveLast => {
            state.move_cursor_last();
            (true, vec![])
        }
        Event::PageDown => {
            state.page_down();
            (true, vec![])
        }
        Event::PageUp => {
            state.page_up();
            (true, vec![])
        }
        Event::Confirm => {
            let Some(item) = state.selected_item() else {
                tracing::debug!("confirm with nothing visible, ignoring");
                return (false, vec![]);
            };
            tracing::debug!(cursor = state.cursor(), "item selected");
            (
                false,
                vec![Action::Select {
                    value: item.value().to_string(),
                }],
            )
        }
        Event::Cancel => {
            tracing::debug!("selection cancelled");
            (false, vec![Action::Cancel])
        }
        Event::ToggleDisplay => {
            state.toggle_display_mode();
            (true, vec![])
        }
        Event::BeginFilter => {
            state.begin_filter_edit();
            (
                false,
                vec![Action::EditFilter {
                    seed: state.filter_text().to_string(),
                    max_len: state.filter_max_len(),
                }],
            )
        }
        Event::Resize => {
            state.clear_prompt_error();
            (true, vec![Action::RefreshGeometry])
        }
        Event::FilterCommitted(_) => (false, vec![]),
    }
}
