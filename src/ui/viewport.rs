//! Scroll window computation.
//!
//! The window keeps the cursor near the middle of the menu and sticks to the
//! top or bottom edge when the cursor is close to either end of the list.

/// Visible window over a list of `len` entries on a surface `height` rows tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First list index shown on row 0.
    pub start: usize,
    /// Number of surface rows.
    pub height: usize,
}

impl Viewport {
    /// Computes `start = clamp(cursor - height/2, 0, max(0, len - height))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabpick::ui::Viewport;
    ///
    /// assert_eq!(Viewport::compute(100, 50, 10).start, 45);
    /// assert_eq!(Viewport::compute(100, 2, 10).start, 0);
    /// assert_eq!(Viewport::compute(100, 99, 10).start, 90);
    /// assert_eq!(Viewport::compute(5, 4, 10).start, 0);
    /// ```
    #[must_use]
    pub const fn compute(len: usize, cursor: usize, height: usize) -> Self {
        let centered = cursor.saturating_sub(height / 2);
        let last_start = len.saturating_sub(height);
        let start = if centered < last_start {
            centered
        } else {
            last_start
        };
        Self { start, height }
    }

    /// List index drawn on surface row `row`.
    #[must_use]
    pub const fn index_at(&self, row: usize) -> usize {
        self.start + row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stays_in_bounds_and_cursor_row_is_on_screen() {
        for len in 0..40 {
            for height in 1..15 {
                for cursor in 0..len.max(1) {
                    let vp = Viewport::compute(len, cursor, height);
                    assert!(vp.start <= len.saturating_sub(height), "len={len} h={height} c={cursor}");
                    if len > 0 {
                        assert!(vp.start <= cursor);
                        assert!(cursor - vp.start < height);
                        assert_eq!(vp.index_at(cursor - vp.start), cursor);
                    }
                }
            }
        }
    }

    #[test]
    fn short_list_starts_at_zero() {
        for cursor in 0..5 {
            assert_eq!(Viewport::compute(5, cursor, 5).start, 0);
            assert_eq!(Viewport::compute(5, cursor, 20).start, 0);
        }
    }
}
