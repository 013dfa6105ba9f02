//! Drawing and input capability consumed by the picker.
//!
//! The state machine and renderer never touch the terminal directly. They talk
//! to a [`Surface`], which owns a menu area of `rows x cols` cells plus one
//! prompt line below it, decodes keyboard input into [`Key`]s, and provides a
//! line editor for the filter prompt.
//!
//! [`TtySurface`](crate::ui::terminal::TtySurface) is the production
//! implementation; tests drive sessions with in-memory surfaces.

use std::io;

/// Character that starts the prompt line whenever it shows filter text.
pub const PROMPT_PREFIX: char = '/';

/// Visual attribute for a menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attr {
    #[default]
    Normal,
    /// Inverted video, used for the cursor row.
    Highlighted,
}

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character without control modifiers.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Enter,
    Backspace,
    Tab,
    Escape,
    /// Ctrl-C. Raw mode delivers it as a key instead of a signal.
    Interrupt,
    /// The terminal changed size.
    Resize,
    /// Anything the picker does not bind.
    Other,
}

/// Full-screen drawing surface with keyboard input.
pub trait Surface {
    /// Size of the menu area as `(rows, cols)`, excluding the prompt line.
    fn size(&self) -> (usize, usize);

    /// Re-reads the terminal geometry after a resize.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry cannot be queried.
    fn refresh_size(&mut self) -> io::Result<()>;

    /// Draws `text` on menu row `row` with `attr`, clearing the rest of the row.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal write fails.
    fn put_row(&mut self, row: usize, text: &str, attr: Attr) -> io::Result<()>;

    /// Replaces the prompt line with `text`. An empty string blanks it.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal write fails.
    fn put_prompt(&mut self, text: &str) -> io::Result<()>;

    /// Pushes queued drawing to the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&mut self) -> io::Result<()>;

    /// Blocks until the next key press or resize.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn next_key(&mut self) -> io::Result<Key>;

    /// Runs the prompt-line editor with echo and a visible cursor.
    ///
    /// Starts with `seed` in the buffer and returns the committed line. The
    /// buffer never grows past `max_len` characters.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal I/O fails while editing.
    fn read_line(&mut self, seed: &str, max_len: usize) -> io::Result<String>;
}
