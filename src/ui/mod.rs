//! Terminal user interface layer.
//!
//! This module turns application state into drawing calls on a [`Surface`]
//! and provides the crossterm implementation of that surface.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → MenuViewModel → render → Surface
//! ```
//!
//! # Modules
//!
//! - [`surface`]: The drawing/input capability trait and decoded key type
//! - [`terminal`]: `/dev/tty` implementation on top of crossterm
//! - [`viewport`]: Scroll window computation
//! - [`viewmodel`]: Per-frame view model types
//! - [`renderer`]: Full-redraw rendering entry point
//! - [`helpers`]: Width fitting for rows and prompt text

pub mod helpers;
pub mod renderer;
pub mod surface;
pub mod terminal;
pub mod viewmodel;
pub mod viewport;

pub use renderer::render;
pub use surface::{Attr, Key, Surface};
pub use terminal::TtySurface;
pub use viewmodel::{MenuViewModel, RowView};
pub use viewport::Viewport;
