//! Shared text shaping for rows and the prompt line.
//!
//! Widths are terminal cells, not characters: East Asian wide characters and
//! most emoji take two cells, combining marks take none.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Distance between tab stops, in cells.
const TAB_WIDTH: usize = 8;

/// Fits `text` into `cols` terminal cells.
///
/// Tabs expand to the next multiple of 8 cells, measured from the start of
/// the row, so column-aligned display text keeps its alignment. Other control
/// characters become a single space so they cannot move the terminal cursor.
/// The text is then cut so it occupies at most `cols` cells; a wide character
/// that would straddle the edge is dropped.
///
/// # Example
///
/// ```rust
/// use tabpick::ui::helpers::fit_width;
///
/// assert_eq!(fit_width("one\ttwo", 80), "one     two");
/// assert_eq!(fit_width("abcdef", 3), "abc");
/// assert_eq!(fit_width("日本語", 5), "日本");
/// ```
#[must_use]
pub fn fit_width(text: &str, cols: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for c in text.chars() {
        if c == '\t' {
            let stop = (used / TAB_WIDTH + 1) * TAB_WIDTH;
            let spaces = stop.min(cols) - used;
            out.extend(std::iter::repeat(' ').take(spaces));
            used += spaces;
            if used == cols {
                break;
            }
            continue;
        }

        let (c, width) = cell(c);
        if used + width > cols {
            break;
        }
        out.push(c);
        used += width;
    }
    out
}

/// Keeps the end of `text` that fits in `cols` cells, so the part of a long
/// prompt where typing happens stays visible.
#[must_use]
pub fn tail_width(text: &str, cols: usize) -> String {
    let mut kept = Vec::new();
    let mut used = 0;

    for c in text.chars().rev() {
        let (c, width) = cell(c);
        if used + width > cols {
            break;
        }
        kept.push(c);
        used += width;
    }
    kept.into_iter().rev().collect()
}

/// Number of cells `text` occupies once drawn.
#[must_use]
pub fn cell_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// A drawable stand-in for `c` and the cells it takes.
fn cell(c: char) -> (char, usize) {
    if c.is_control() {
        (' ', 1)
    } else {
        (c, UnicodeWidthChar::width(c).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_counts_characters_not_bytes() {
        assert_eq!(fit_width("héllo", 2), "hé");
        assert_eq!(fit_width("x", 0), "");
    }

    #[test]
    fn wide_text_never_exceeds_the_row() {
        let out = fit_width("日本語のメニュー項目", 8);
        assert_eq!(out, "日本語の");
        assert_eq!(cell_width(&out), 8);

        let out = fit_width("日本語", 5);
        assert!(cell_width(&out) <= 5);
        assert_eq!(out, "日本");

        assert_eq!(cell_width(&fit_width("🦀🦀🦀 crab", 5)), 4);
    }

    #[test]
    fn combining_marks_take_no_extra_cells() {
        let text = "e\u{301}e\u{301}e\u{301}";
        assert_eq!(fit_width(text, 2), "e\u{301}e\u{301}");
    }

    #[test]
    fn tabs_expand_to_stops() {
        assert_eq!(fit_width("a\tb", 80), "a       b");
        assert_eq!(fit_width("abcdefgh\tx", 80), "abcdefgh        x");
        assert_eq!(fit_width("ab\tcd", 5), "ab   ");
    }

    #[test]
    fn other_controls_become_spaces() {
        assert_eq!(fit_width("a\u{1b}[2Jb", 80), "a [2Jb");
    }

    #[test]
    fn tail_width_keeps_the_end() {
        assert_eq!(tail_width("/abcdef", 4), "cdef");
        assert_eq!(tail_width("/ab", 10), "/ab");
    }

    #[test]
    fn tail_width_measures_cells() {
        let out = tail_width("/検索パターン", 7);
        assert_eq!(out, "パターン".chars().skip(1).collect::<String>());
        assert!(cell_width(&out) <= 7);
        assert_eq!(cell_width(&tail_width("/日本", 4)), 4);
    }
}
