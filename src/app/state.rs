//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of all session state: the
//! immutable item store, the visible list derived from it, the cursor, the
//! filter text, and the input and display modes.
//!
//! # Architecture
//!
//! `AppState` separates core data (the item store) from derived state (the
//! visible list and cursor). The visible list is rebuilt from the whole store
//! on every filter commit, so filters never compound. View models are computed
//! on demand from state snapshots.
//!
//! # Example
//!
//! ```rust
//! use tabpick::app::AppState;
//! use tabpick::domain::ItemStore;
//!
//! let store = ItemStore::from_reader("a\tAlpha\nb\tBeta\n".as_bytes()).unwrap();
//! let mut state = AppState::new(store);
//! state.move_cursor_down();
//! assert_eq!(state.selected_item().map(|item| item.value()), Some("b"));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.highlighted_row(), Some(1));
//! ```

use super::modes::{DisplayMode, InputMode, VALUE_MARKER};
use crate::domain::{filter, Item, ItemStore, PickerError, Result, VisibleList};
use crate::ui::helpers::fit_width;
use crate::ui::surface::{Attr, PROMPT_PREFIX};
use crate::ui::viewmodel::{MenuViewModel, RowView};
use crate::ui::viewport::Viewport;

/// Default upper bound on the filter text length, in characters.
pub const DEFAULT_FILTER_MAX_LEN: usize = 2048;

/// Central session state container.
///
/// Mutated only by the event handler. Every mutator keeps the cursor inside
/// the visible list, or at 0 when the list is empty.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full list of items, never modified after construction.
    store: ItemStore,

    /// Items matching the current filter, as indices into `store`.
    visible: VisibleList,

    /// Position within `visible`.
    cursor: usize,

    /// Last successfully applied filter pattern. Empty means no filtering.
    filter_text: String,

    /// Maximum characters the line editor accepts for `filter_text`.
    filter_max_len: usize,

    input_mode: InputMode,
    display_mode: DisplayMode,

    /// Menu rows drawn by the previous render; drives the half-page step.
    last_rows_drawn: usize,

    /// Diagnostic from the last failed filter commit, shown on the prompt line
    /// until the next successful commit or resize.
    prompt_error: Option<String>,
}

impl AppState {
    /// Creates the initial state: browsing, no filter, full list, cursor 0.
    #[must_use]
    pub fn new(store: ItemStore) -> Self {
        let visible = VisibleList::all(&store);
        Self {
            store,
            visible,
            cursor: 0,
            filter_text: String::new(),
            filter_max_len: DEFAULT_FILTER_MAX_LEN,
            input_mode: InputMode::Browsing,
            display_mode: DisplayMode::Display,
            last_rows_drawn: 0,
            prompt_error: None,
        }
    }

    /// Overrides the filter length limit.
    #[must_use]
    pub fn with_filter_max_len(mut self, max_len: usize) -> Self {
        self.filter_max_len = max_len;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    #[must_use]
    pub const fn visible(&self) -> &VisibleList {
        &self.visible
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    #[must_use]
    pub const fn filter_max_len(&self) -> usize {
        self.filter_max_len
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub const fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    #[must_use]
    pub fn prompt_error(&self) -> Option<&str> {
        self.prompt_error.as_deref()
    }

    /// Records how many menu rows the renderer just drew.
    pub fn record_render(&mut self, rows: usize) {
        self.last_rows_drawn = rows;
    }

    /// Item under the cursor, or `None` when nothing is visible.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.visible.item(&self.store, self.cursor)
    }

    fn last_index(&self) -> Option<usize> {
        self.visible.len().checked_sub(1)
    }

    /// Moves the cursor down one item, stopping at the last item.
    pub fn move_cursor_down(&mut self) {
        self.move_cursor_by(1);
    }

    /// Moves the cursor up one item, stopping at the first item.
    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_last(&mut self) {
        self.cursor = self.last_index().unwrap_or(0);
    }

    /// Moves down by half of the rows drawn in the previous frame.
    pub fn page_down(&mut self) {
        self.move_cursor_by(self.page_step());
    }

    /// Moves up by half of the rows drawn in the previous frame.
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.page_step());
    }

    const fn page_step(&self) -> usize {
        self.last_rows_drawn / 2
    }

    fn move_cursor_by(&mut self, delta: usize) {
        if let Some(last) = self.last_index() {
            self.cursor = self.cursor.saturating_add(delta).min(last);
        }
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    /// Switches to filter editing. The line editor runs outside the state.
    pub fn begin_filter_edit(&mut self) {
        self.input_mode = InputMode::FilterEditing;
    }

    /// Applies a committed filter line and returns to browsing.
    ///
    /// On success the visible list is recomputed from the full store and the
    /// cursor returns to the top. On failure the filter text, visible list and
    /// cursor are left untouched and the diagnostic is kept for the prompt line.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Pattern`] when `text` is not a valid pattern.
    pub fn commit_filter(&mut self, text: String) -> Result<()> {
        self.input_mode = InputMode::Browsing;

        let _span = tracing::debug_span!(
            "commit_filter",
            total_items = self.store.len(),
            previous_visible = self.visible.len()
        )
        .entered();

        match filter(&self.store, &text) {
            Ok(visible) => {
                self.visible = visible;
                self.filter_text = text;
                self.cursor = 0;
                self.prompt_error = None;
                tracing::debug!(visible = self.visible.len(), "filter committed");
                Ok(())
            }
            Err(err) => {
                if let PickerError::Pattern { message, .. } = &err {
                    self.prompt_error = Some(message.clone());
                }
                Err(err)
            }
        }
    }

    /// Drops a stale pattern diagnostic so the prompt shows the filter again.
    pub fn clear_prompt_error(&mut self) {
        self.prompt_error = None;
    }

    /// Text for the prompt line below the menu.
    ///
    /// Shows the pattern diagnostic after a failed commit, otherwise the active
    /// filter, otherwise nothing.
    #[must_use]
    pub fn prompt_line(&self) -> String {
        match (&self.prompt_error, self.filter_text.is_empty()) {
            (Some(message), _) => format!("{PROMPT_PREFIX}{message}"),
            (None, true) => String::new(),
            (None, false) => format!("{PROMPT_PREFIX}{}", self.filter_text),
        }
    }

    /// Computes the frame for a menu area of `rows x cols` cells.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Place the window so the cursor sits at the middle row
    /// 2. Clamp it so it never starts before the first item or leaves empty
    ///    rows at the bottom while earlier items exist
    /// 3. Emit exactly `rows` rows; rows past the end of the list are blank
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> MenuViewModel {
        let viewport = Viewport::compute(self.visible.len(), self.cursor, rows);

        let rows = (0..rows)
            .map(|row| {
                let index = viewport.index_at(row);
                self.visible
                    .item(&self.store, index)
                    .map_or_else(RowView::blank, |item| RowView {
                        text: fit_width(&self.row_text(item), cols),
                        attr: if index == self.cursor {
                            Attr::Highlighted
                        } else {
                            Attr::Normal
                        },
                    })
            })
            .collect();

        MenuViewModel {
            rows,
            prompt: fit_width(&self.prompt_line(), cols),
        }
    }

    fn row_text(&self, item: &Item) -> String {
        match self.display_mode {
            DisplayMode::Display => item.display().to_string(),
            DisplayMode::Value => format!("{VALUE_MARKER}{}", item.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(count: usize) -> AppState {
        let input: String = (0..count).map(|i| format!("v{i}\titem {i}\n")).collect();
        AppState::new(ItemStore::from_reader(input.as_bytes()).unwrap())
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut state = state_with(3);
        state.move_cursor_up();
        assert_eq!(state.cursor(), 0);
        for _ in 0..10 {
            state.move_cursor_down();
        }
        assert_eq!(state.cursor(), 2);
        state.move_cursor_first();
        assert_eq!(state.cursor(), 0);
        state.move_cursor_last();
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn navigation_on_empty_list_keeps_cursor_at_zero() {
        let mut state = state_with(0);
        state.record_render(10);
        state.move_cursor_down();
        state.move_cursor_last();
        state.page_down();
        state.page_up();
        assert_eq!(state.cursor(), 0);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn page_step_uses_previous_render() {
        let mut state = state_with(100);
        state.page_down();
        assert_eq!(state.cursor(), 0, "no frame drawn yet");

        state.record_render(20);
        state.page_down();
        assert_eq!(state.cursor(), 10);
        state.record_render(7);
        state.page_down();
        assert_eq!(state.cursor(), 13);
        state.page_up();
        state.page_up();
        state.page_up();
        state.page_up();
        state.page_up();
        assert_eq!(state.cursor(), 0);

        state.record_render(400);
        state.page_down();
        assert_eq!(state.cursor(), 99);
    }

    #[test]
    fn commit_filter_is_absolute_and_resets_cursor() {
        let mut state = state_with(12);
        state.move_cursor_last();
        state.commit_filter("item 1".to_string()).unwrap();
        assert_eq!(state.visible().len(), 3); // 1, 10, 11
        assert_eq!(state.cursor(), 0);

        state.commit_filter("item 2".to_string()).unwrap();
        assert_eq!(state.visible().len(), 1, "filter applies to the full store");

        state.commit_filter(String::new()).unwrap();
        assert_eq!(state.visible().len(), 12);
        assert_eq!(state.prompt_line(), "");
    }

    #[test]
    fn failed_commit_keeps_previous_view() {
        let mut state = state_with(12);
        state.commit_filter("item 1".to_string()).unwrap();
        state.move_cursor_down();
        let before = state.visible().clone();

        assert!(state.commit_filter("item [".to_string()).is_err());
        assert_eq!(state.visible(), &before);
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.filter_text(), "item 1");
        assert_eq!(state.input_mode(), InputMode::Browsing);
        assert!(state.prompt_line().starts_with('/'));
        assert_ne!(state.prompt_line(), "/item 1");

        state.clear_prompt_error();
        assert_eq!(state.prompt_line(), "/item 1");
    }

    #[test]
    fn viewmodel_highlights_cursor_and_blanks_tail() {
        let mut state = state_with(3);
        state.move_cursor_down();
        let vm = state.compute_viewmodel(5, 80);
        assert_eq!(vm.rows.len(), 5);
        assert_eq!(vm.highlighted_row(), Some(1));
        assert_eq!(vm.rows[1].text, "item 1");
        assert_eq!(vm.rows[3], RowView::blank());
        assert_eq!(vm.rows[4], RowView::blank());
    }

    #[test]
    fn viewmodel_scrolls_to_keep_cursor_centered() {
        let mut state = state_with(50);
        for _ in 0..30 {
            state.move_cursor_down();
        }
        let vm = state.compute_viewmodel(10, 80);
        assert_eq!(vm.rows[0].text, "item 25");
        assert_eq!(vm.highlighted_row(), Some(5));
    }

    #[test]
    fn value_mode_prefixes_marker() {
        let mut state = state_with(1);
        state.toggle_display_mode();
        let vm = state.compute_viewmodel(1, 80);
        assert_eq!(vm.rows[0].text, ">v0");
        state.toggle_display_mode();
        assert_eq!(state.compute_viewmodel(1, 80).rows[0].text, "item 0");
    }

    #[test]
    fn empty_list_has_no_highlight() {
        let state = state_with(0);
        let vm = state.compute_viewmodel(4, 80);
        assert_eq!(vm.highlighted_row(), None);
        assert_eq!(vm.rows.len(), 4);
    }
}
