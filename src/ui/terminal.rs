//! Crossterm-backed [`Surface`] bound to the controlling terminal.
//!
//! Standard input carries the item list and standard output carries the
//! result, so the UI is drawn on `/dev/tty` instead. Crossterm itself falls
//! back to `/dev/tty` for key input and raw mode when stdin is not a terminal.
//!
//! [`TtySurface::open`] acquires the terminal (raw mode, alternate screen,
//! hidden cursor) and `Drop` gives it back on every exit path.

use crate::ui::helpers::{cell_width, fit_width, tail_width};
use crate::ui::surface::{Attr, Key, Surface, PROMPT_PREFIX};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand, QueueableCommand,
};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

/// Device opened for drawing regardless of stdio redirection.
const TTY_PATH: &str = "/dev/tty";

/// Full-screen session on the controlling terminal.
pub struct TtySurface {
    tty: File,
    /// Terminal height including the prompt line.
    term_rows: u16,
    term_cols: u16,
}

impl TtySurface {
    /// Opens `/dev/tty` and puts it into picker mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be opened or configured. Any state
    /// already changed is restored before returning.
    pub fn open() -> io::Result<Self> {
        let tty = OpenOptions::new().read(true).write(true).open(TTY_PATH)?;
        terminal::enable_raw_mode()?;

        // From here on Drop undoes whatever succeeded.
        let mut surface = Self {
            tty,
            term_rows: 0,
            term_cols: 0,
        };
        surface.tty.execute(EnterAlternateScreen)?;
        surface.tty.execute(cursor::Hide)?;
        surface.refresh_size()?;

        tracing::debug!(
            rows = surface.term_rows,
            cols = surface.term_cols,
            "terminal session started"
        );
        Ok(surface)
    }

    fn prompt_row(&self) -> u16 {
        self.term_rows.saturating_sub(1)
    }

    fn draw_edit_line(&mut self, buf: &str) -> io::Result<()> {
        let line = format!("{PROMPT_PREFIX}{buf}");
        let visible = tail_width(&line, usize::from(self.term_cols.saturating_sub(1)));
        let col = u16::try_from(cell_width(&visible)).unwrap_or(u16::MAX);

        self.tty.queue(cursor::MoveTo(0, self.prompt_row()))?;
        self.tty.queue(Clear(ClearType::CurrentLine))?;
        self.tty.queue(Print(visible))?;
        self.tty.queue(cursor::MoveTo(col, self.prompt_row()))?;
        self.tty.flush()
    }
}

impl Surface for TtySurface {
    fn size(&self) -> (usize, usize) {
        (
            usize::from(self.term_rows.saturating_sub(1)),
            usize::from(self.term_cols),
        )
    }

    fn refresh_size(&mut self) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        self.term_cols = cols;
        self.term_rows = rows;
        self.tty.queue(Clear(ClearType::All))?;
        tracing::debug!(rows, cols, "terminal geometry refreshed");
        Ok(())
    }

    fn put_row(&mut self, row: usize, text: &str, attr: Attr) -> io::Result<()> {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        self.tty.queue(cursor::MoveTo(0, row))?;
        // Clear first: erasing after a full-width row would eat its last cell.
        self.tty.queue(Clear(ClearType::CurrentLine))?;
        if attr == Attr::Highlighted {
            self.tty.queue(SetAttribute(Attribute::Reverse))?;
        }
        self.tty.queue(Print(text))?;
        if attr == Attr::Highlighted {
            self.tty.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn put_prompt(&mut self, text: &str) -> io::Result<()> {
        let text = fit_width(text, usize::from(self.term_cols));
        self.tty.queue(cursor::MoveTo(0, self.prompt_row()))?;
        self.tty.queue(Clear(ClearType::CurrentLine))?;
        self.tty.queue(Print(text))?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.tty.flush()
    }

    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    return Ok(decode_key(key));
                }
                Event::Resize(cols, rows) => {
                    self.term_cols = cols;
                    self.term_rows = rows;
                    return Ok(Key::Resize);
                }
                _ => {}
            }
        }
    }

    fn read_line(&mut self, seed: &str, max_len: usize) -> io::Result<String> {
        let mut buf: String = seed.chars().take(max_len).collect();
        self.tty.execute(cursor::Show)?;
        self.draw_edit_line(&buf)?;

        let committed = loop {
            let key = match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => key,
                Event::Resize(cols, rows) => {
                    self.term_cols = cols;
                    self.term_rows = rows;
                    self.draw_edit_line(&buf)?;
                    continue;
                }
                _ => continue,
            };

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Enter => break buf,
                KeyCode::Esc => break seed.to_string(),
                KeyCode::Char('c') if ctrl => break seed.to_string(),
                KeyCode::Char('u') if ctrl => buf.clear(),
                KeyCode::Backspace => {
                    buf.pop();
                }
                KeyCode::Char(c) if !ctrl && !c.is_control() => {
                    if buf.chars().count() < max_len {
                        buf.push(c);
                    }
                }
                _ => {}
            }
            self.draw_edit_line(&buf)?;
        };

        self.tty.execute(cursor::Hide)?;
        tracing::debug!(len = committed.len(), "filter line committed");
        Ok(committed)
    }
}

impl Drop for TtySurface {
    fn drop(&mut self) {
        let _ = self.tty.queue(SetAttribute(Attribute::Reset));
        let _ = self.tty.queue(cursor::Show);
        let _ = self.tty.queue(LeaveAlternateScreen);
        let _ = self.tty.flush();
        let _ = terminal::disable_raw_mode();
        tracing::debug!("terminal session restored");
    }
}

impl std::fmt::Debug for TtySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtySurface")
            .field("term_rows", &self.term_rows)
            .field("term_cols", &self.term_cols)
            .finish_non_exhaustive()
    }
}

/// Maps a crossterm key event onto the picker's key set.
fn decode_key(key: KeyEvent) -> Key {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Key::Interrupt,
        KeyCode::Char(c) if !ctrl => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    }
}
