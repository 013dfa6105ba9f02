//! Item model and the item store built from the input stream.
//!
//! Each input record is a `value<TAB>display` line. The store keeps records in
//! read order and is never mutated after [`ItemStore::from_reader`] returns.

use super::error::{PickerError, RecordDefect, Result};
use std::io::BufRead;

/// A selectable record.
///
/// `value` is what gets printed on confirmation; `display` is what the user sees
/// and what the filter matches against. Both are non-empty and contain no newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    value: String,
    display: String,
}

impl Item {
    /// Parses one record from a line with its terminator already removed.
    ///
    /// Everything after the first tab belongs to the display text, including
    /// further tabs.
    ///
    /// # Errors
    ///
    /// Returns the [`RecordDefect`] describing why the line is not a record.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabpick::domain::{Item, RecordDefect};
    ///
    /// let item = Item::parse("a\tAlpha").unwrap();
    /// assert_eq!(item.value(), "a");
    /// assert_eq!(item.display(), "Alpha");
    /// assert_eq!(Item::parse("noTabHere"), Err(RecordDefect::MissingSeparator));
    /// ```
    pub fn parse(line: &str) -> std::result::Result<Self, RecordDefect> {
        let (value, display) = line
            .split_once('\t')
            .ok_or(RecordDefect::MissingSeparator)?;

        if value.is_empty() {
            return Err(RecordDefect::EmptyValue);
        }
        if display.is_empty() {
            return Err(RecordDefect::EmptyDisplay);
        }

        Ok(Self {
            value: value.to_string(),
            display: display.to_string(),
        })
    }

    /// Payload returned to the caller on selection.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text shown in the menu and matched by the filter.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// The full, unfiltered list of items in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Reads records from `reader` until end of input.
    ///
    /// Blank lines (including a bare `\r\n`) are skipped. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// - [`PickerError::SourceRead`] if reading fails
    /// - [`PickerError::MalformedRecord`] for the first non-blank line that is
    ///   not a valid record
    ///
    /// # Examples
    ///
    /// ```
    /// use tabpick::domain::ItemStore;
    ///
    /// let store = ItemStore::from_reader("a\tAlpha\n\nb\tBeta\n".as_bytes()).unwrap();
    /// assert_eq!(store.len(), 2);
    /// ```
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let _span = tracing::debug_span!("load_items").entered();

        let mut items = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(PickerError::SourceRead)?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = strip_terminator(&line);
            if line.is_empty() {
                tracing::trace!(line = line_no, "skipping blank line");
                continue;
            }

            let item = Item::parse(line).map_err(|defect| {
                tracing::debug!(line = line_no, %defect, "rejecting input line");
                PickerError::MalformedRecord {
                    line: line_no,
                    defect,
                }
            })?;
            items.push(item);
        }

        tracing::debug!(items = items.len(), lines = line_no, "item store loaded");
        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    fn load(input: &str) -> Result<ItemStore> {
        ItemStore::from_reader(input.as_bytes())
    }

    #[test]
    fn reads_records_in_order() {
        let store = load("a\tAlpha\nb\tBeta\nc\tCandy\n").unwrap();
        let pairs: Vec<_> = store.iter().map(|i| (i.value(), i.display())).collect();
        assert_eq!(pairs, vec![("a", "Alpha"), ("b", "Beta"), ("c", "Candy")]);
    }

    #[test]
    fn skips_blank_lines() {
        let store = load("a\tAlpha\n\nb\tBeta\n").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(Item::value), Some("b"));
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let store = load("a\tAlpha\nb\tBeta").unwrap();
        assert_eq!(store.get(1).map(Item::display), Some("Beta"));
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let store = load("a\tAlpha\r\n\r\nb\tBeta\r\n").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).map(Item::display), Some("Alpha"));
    }

    #[test]
    fn display_keeps_later_tabs() {
        let store = load("v\tone\ttwo\n").unwrap();
        assert_eq!(store.get(0).map(Item::display), Some("one\ttwo"));
    }

    #[test]
    fn missing_tab_is_malformed_with_line_number() {
        let err = load("a\tAlpha\n\nnoTabHere\n").unwrap_err();
        assert!(matches!(
            err,
            PickerError::MalformedRecord {
                line: 3,
                defect: RecordDefect::MissingSeparator
            }
        ));
    }

    #[test]
    fn empty_fields_are_malformed() {
        assert!(matches!(
            load("\tAlpha\n").unwrap_err(),
            PickerError::MalformedRecord { defect: RecordDefect::EmptyValue, .. }
        ));
        assert!(matches!(
            load("a\t\n").unwrap_err(),
            PickerError::MalformedRecord { defect: RecordDefect::EmptyDisplay, .. }
        ));
    }

    #[test]
    fn empty_input_gives_empty_store() {
        assert!(load("").unwrap().is_empty());
        assert!(load("\n\n").unwrap().is_empty());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn read_failure_is_source_error() {
        let err = ItemStore::from_reader(io::BufReader::new(FailingReader)).unwrap_err();
        assert!(matches!(err, PickerError::SourceRead(_)));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"a\tcaf\xff\n";
        let store = ItemStore::from_reader(bytes).unwrap();
        assert_eq!(store.get(0).map(Item::display), Some("caf\u{fffd}"));
    }
}
