//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the binary (main.rs) and the domain/ui layers. It
//! implements the keyboard-driven state machine that owns the session.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key → keymap → Event → Event Handler → State Mutations → Actions → Session Loop
//!                             ↑                                          ↓
//!                             └──────── FilterCommitted (line editor) ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`keymap`]: Browsing-mode key bindings
//! - [`modes`]: Input and display mode types
//! - [`session`]: The render/read/dispatch loop
//! - [`state`]: Central session state and view model computation
//!
//! # Example
//!
//! ```rust
//! use tabpick::app::{handle_event, AppState, Event};
//! use tabpick::domain::ItemStore;
//!
//! let mut state = AppState::new(ItemStore::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::MoveDown);
//! assert!(should_render && actions.is_empty());
//! ```

pub mod actions;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::{DisplayMode, InputMode};
pub use session::run_session;
pub use state::AppState;
