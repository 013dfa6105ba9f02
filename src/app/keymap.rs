//! Key bindings for browsing mode.
//!
//! | Key(s)                                  | Event            |
//! |-----------------------------------------|------------------|
//! | `Down`, `j`                             | `MoveDown`       |
//! | `Up`, `k`                               | `MoveUp`         |
//! | `g`, `^`                                | `MoveFirst`      |
//! | `G`, `$`                                | `MoveLast`       |
//! | `PageDown`, `d`                         | `PageDown`       |
//! | `PageUp`, `u`                           | `PageUp`         |
//! | `Right`, `l`, `Space`, `Enter`          | `Confirm`        |
//! | `q`, `h`, `Backspace`, `Left`, `Ctrl-C` | `Cancel`         |
//! | `=`, `Tab`                              | `ToggleDisplay`  |
//! | `/`                                     | `BeginFilter`    |
//! | terminal resize                         | `Resize`         |
//!
//! Keys typed while the filter prompt is open go to the line editor and never
//! reach this table.

use super::handler::Event;
use crate::ui::Key;

/// Maps a decoded key to a browsing event. Unbound keys yield `None`.
#[must_use]
pub fn map_key(key: Key) -> Option<Event> {
    Some(match key {
        Key::Down | Key::Char('j') => Event::MoveDown,
        Key::Up | Key::Char('k') => Event::MoveUp,
        Key::Char('g' | '^') => Event::MoveFirst,
        Key::Char('G' | '$') => Event::MoveLast,
        Key::PageDown | Key::Char('d') => Event::PageDown,
        Key::PageUp | Key::Char('u') => Event::PageUp,
        Key::Right | Key::Enter | Key::Char('l' | ' ') => Event::Confirm,
        Key::Left | Key::Backspace | Key::Interrupt | Key::Char('q' | 'h') => Event::Cancel,
        Key::Tab | Key::Char('=') => Event::ToggleDisplay,
        Key::Char('/') => Event::BeginFilter,
        Key::Resize => Event::Resize,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vi_letters_and_arrows_share_events() {
        assert_eq!(map_key(Key::Char('j')), map_key(Key::Down));
        assert_eq!(map_key(Key::Char('k')), map_key(Key::Up));
        assert_eq!(map_key(Key::Char('l')), Some(Event::Confirm));
        assert_eq!(map_key(Key::Char('h')), Some(Event::Cancel));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(Key::Char('x')), None);
        assert_eq!(map_key(Key::Escape), None);
        assert_eq!(map_key(Key::Other), None);
    }
}
