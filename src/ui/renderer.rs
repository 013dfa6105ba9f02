//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → [`MenuViewModel`]
//! 2. **Drawing**: every row and the prompt line are sent to the [`Surface`]
//!
//! There is no diffing; each call redraws the whole menu.

use crate::app::AppState;
use crate::ui::surface::Surface;
use crate::ui::viewmodel::MenuViewModel;
use std::io;

/// Renders the menu and prompt line and returns the number of menu rows drawn.
///
/// The returned count feeds the half-page step of the next page-up/page-down.
///
/// # Errors
///
/// Returns an error if any drawing call fails.
///
/// # Example
///
/// ```rust,ignore
/// let rows = tabpick::ui::render(&state, &mut surface)?;
/// state.record_render(rows);
/// ```
pub fn render<S: Surface + ?Sized>(state: &AppState, surface: &mut S) -> io::Result<usize> {
    let (rows, cols) = surface.size();
    let viewmodel = state.compute_viewmodel(rows, cols);
    draw_viewmodel(&viewmodel, surface)?;
    tracing::trace!(rows, cols, cursor = state.cursor(), "frame rendered");
    Ok(viewmodel.rows.len())
}

fn draw_viewmodel<S: Surface + ?Sized>(vm: &MenuViewModel, surface: &mut S) -> io::Result<()> {
    for (row, view) in vm.rows.iter().enumerate() {
        surface.put_row(row, &view.text, view.attr)?;
    }
    surface.put_prompt(&vm.prompt)?;
    surface.flush()
}
