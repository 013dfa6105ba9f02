//! The interactive session loop.
//!
//! [`run_session`] renders, waits for a key, dispatches it through the keymap
//! and the event handler, and executes the returned actions, until an action
//! ends the session. Each transition, including its redraw, completes before
//! the next key is read.

use super::handler::{handle_event, Event};
use super::keymap::map_key;
use super::{Action, AppState};
use crate::domain::Result;
use crate::ui::{self, Surface};
use std::collections::VecDeque;

/// Runs the picker until the user confirms or cancels.
///
/// # Returns
///
/// - `Ok(Some(value))` when an item was confirmed
/// - `Ok(None)` when the user cancelled
///
/// # Errors
///
/// Returns [`PickerError::Terminal`](crate::domain::PickerError::Terminal) when
/// drawing or reading input fails. Pattern errors never escape.
pub fn run_session<S: Surface + ?Sized>(
    state: &mut AppState,
    surface: &mut S,
) -> Result<Option<String>> {
    let _span = tracing::info_span!("session", items = state.store().len()).entered();

    let mut dirty = true;
    loop {
        if dirty {
            let rows = ui::render(state, surface)?;
            state.record_render(rows);
        }

        let key = surface.next_key()?;
        let Some(event) = map_key(key) else {
            tracing::trace!(?key, "unbound key");
            dirty = false;
            continue;
        };

        let (should_render, actions) = handle_event(state, &event);
        dirty = should_render;

        let mut pending: VecDeque<Action> = actions.into();
        while let Some(action) = pending.pop_front() {
            match action {
                Action::Select { value } => {
                    tracing::info!("session ended with a selection");
                    return Ok(Some(value));
                }
                Action::Cancel => {
                    tracing::info!("session cancelled");
                    return Ok(None);
                }
                Action::RefreshGeometry => {
                    surface.refresh_size()?;
                    dirty = true;
                }
                Action::EditFilter { seed, max_len } => {
                    let line = surface.read_line(&seed, max_len)?;
                    let (should_render, more) =
                        handle_event(state, &Event::FilterCommitted(line));
                    dirty |= should_render;
                    pending.extend(more);
                }
            }
        }
    }
}
