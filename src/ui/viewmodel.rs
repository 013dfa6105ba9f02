//! View model types representing one full frame.
//!
//! A [`MenuViewModel`] is computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. It holds
//! exactly one [`RowView`] per menu row, so drawing it is always a full redraw.
//!
//! # Example
//!
//! ```rust
//! use tabpick::ui::{Attr, MenuViewModel, RowView};
//!
//! let vm = MenuViewModel {
//!     rows: vec![
//!         RowView { text: "Alpha".to_string(), attr: Attr::Highlighted },
//!         RowView::blank(),
//!     ],
//!     prompt: String::new(),
//! };
//! assert_eq!(vm.highlighted_row(), Some(0));
//! ```

use super::surface::Attr;

/// Everything drawn in one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuViewModel {
    /// One entry per menu row, top to bottom.
    pub rows: Vec<RowView>,

    /// Prompt line contents (may be empty).
    pub prompt: String,
}

impl MenuViewModel {
    /// Row index carrying the highlight, if any.
    #[must_use]
    pub fn highlighted_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.attr == Attr::Highlighted)
    }
}

/// A single menu row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowView {
    /// Text already fitted to the surface width.
    pub text: String,

    /// Normal or highlighted.
    pub attr: Attr,
}

impl RowView {
    /// An empty row past the end of the list.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }
}
