//! Regex filter over the item store.
//!
//! [`filter`] turns a pattern into a [`VisibleList`]: the ordered indices of the
//! items whose display text contains a case-insensitive match. Filtering is
//! always evaluated against the whole store, never against a previous result.

use super::error::{PickerError, Result};
use super::item::{Item, ItemStore};
use regex::RegexBuilder;

/// Ordered, non-owning view into an [`ItemStore`].
///
/// Holds store indices in ascending order, so it is always a subsequence of the
/// store. Resolve entries through [`VisibleList::item`] with the store it was
/// built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleList {
    indices: Vec<usize>,
}

impl VisibleList {
    /// View containing every item in `store`.
    #[must_use]
    pub fn all(store: &ItemStore) -> Self {
        Self {
            indices: (0..store.len()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Store indices in visible order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Resolves the item at visible `position`.
    #[must_use]
    pub fn item<'s>(&self, store: &'s ItemStore, position: usize) -> Option<&'s Item> {
        self.indices
            .get(position)
            .and_then(|&index| store.get(index))
    }
}

/// Computes the visible list for `pattern`.
///
/// An empty pattern selects everything. Otherwise the pattern is compiled as a
/// case-insensitive regular expression and an item is kept when its display
/// text contains a match anywhere.
///
/// # Errors
///
/// Returns [`PickerError::Pattern`] when the pattern does not compile.
///
/// # Examples
///
/// ```
/// use tabpick::domain::{filter, ItemStore};
///
/// let store = ItemStore::from_reader("a\tAlpha\nb\tBeta\nc\tCandy\n".as_bytes()).unwrap();
/// let visible = filter(&store, "^a").unwrap();
/// assert_eq!(visible.indices(), &[0]);
/// assert!(filter(&store, "(").is_err());
/// ```
pub fn filter(store: &ItemStore, pattern: &str) -> Result<VisibleList> {
    let _span = tracing::debug_span!(
        "filter",
        total_items = store.len(),
        pattern_len = pattern.len()
    )
    .entered();

    if pattern.is_empty() {
        return Ok(VisibleList::all(store));
    }

    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| PickerError::Pattern {
            pattern: pattern.to_string(),
            message: condense_diagnostic(&e.to_string()),
        })?;

    let indices: Vec<usize> = store
        .iter()
        .enumerate()
        .filter(|(_, item)| regex.is_match(item.display()))
        .map(|(index, _)| index)
        .collect();

    tracing::debug!(matched = indices.len(), "filter applied");
    Ok(VisibleList { indices })
}

/// Reduces the regex engine's multi-line report to its final message line so it
/// fits on the prompt row.
fn condense_diagnostic(report: &str) -> String {
    report
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map_or_else(
            || "invalid regular expression".to_string(),
            |line| line.strip_prefix("error: ").unwrap_or(line).to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ItemStore {
        ItemStore::from_reader(
            "a\tAlpha\nb\tBeta\nc\tCandy\nd\talphabet soup\ne\tDelta\n".as_bytes(),
        )
        .unwrap()
    }

    fn values(store: &ItemStore, visible: &VisibleList) -> Vec<String> {
        (0..visible.len())
            .filter_map(|pos| visible.item(store, pos))
            .map(|item| item.value().to_string())
            .collect()
    }

    #[test]
    fn empty_pattern_is_identity() {
        let store = store();
        let first = filter(&store, "").unwrap();
        let second = filter(&store, "").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.indices(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn anchored_pattern_matches_case_insensitively() {
        let store = store();
        let visible = filter(&store, "^A").unwrap();
        assert_eq!(values(&store, &visible), vec!["a", "d"]);
    }

    #[test]
    fn matches_anywhere_in_display() {
        let store = store();
        let visible = filter(&store, "ta").unwrap();
        assert_eq!(values(&store, &visible), vec!["b", "e"]);
    }

    #[test]
    fn value_field_is_not_searched() {
        let store = store();
        assert!(filter(&store, "^c$").unwrap().is_empty());
    }

    #[test]
    fn extended_syntax_alternation() {
        let store = store();
        let visible = filter(&store, "beta|candy").unwrap();
        assert_eq!(values(&store, &visible), vec!["b", "c"]);
    }

    #[test]
    fn results_are_ordered_subsequences() {
        let store = store();
        for pattern in ["", "a", "l", "^[a-c]", "e.*t", "zzz", "."] {
            let visible = filter(&store, pattern).unwrap();
            let indices = visible.indices();
            assert!(indices.windows(2).all(|w| w[0] < w[1]), "{pattern}");
            assert!(indices.iter().all(|&i| i < store.len()), "{pattern}");
        }
    }

    #[test]
    fn invalid_pattern_reports_single_line_diagnostic() {
        let store = store();
        let err = filter(&store, "(unclosed").unwrap_err();
        match err {
            PickerError::Pattern { pattern, message } => {
                assert_eq!(pattern, "(unclosed");
                assert!(!message.is_empty());
                assert!(!message.contains('\n'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_store_filters_to_empty() {
        let store = ItemStore::default();
        assert!(filter(&store, "x").unwrap().is_empty());
        assert!(filter(&store, "").unwrap().is_empty());
    }
}
