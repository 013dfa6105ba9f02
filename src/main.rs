//! Command-line entry point.
//!
//! This module is the thin shell around the library: it reads the item list
//! from standard input, runs the session on the controlling terminal, and
//! reports the outcome through standard output and the exit status.
//!
//! # Lifecycle
//!
//! 1. **Configure**: Read [`Config`] from the environment, initialize tracing
//! 2. **Load**: Parse all of stdin into an `ItemStore` (fatal errors exit 5)
//! 3. **Run**: Open `/dev/tty` and run the session loop
//! 4. **Restore**: Drop the surface, returning the terminal to its prior state
//! 5. **Report**: Print the chosen value (exit 0) or exit 1 on cancel
//!
//! Stdin is fully consumed before the terminal is touched, so a load failure
//! never leaves the screen in raw mode.

#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::process::ExitCode;

use tabpick::ui::TtySurface;
use tabpick::{initialize, report_outcome, run_session, AppState, Config, ItemStore, Result};

fn main() -> ExitCode {
    let config = Config::from_env();
    tabpick::observability::init_tracing(&config);

    let _span = tracing::info_span!("tabpick").entered();

    let outcome = ItemStore::from_reader(io::stdin().lock()).and_then(|store| {
        let mut state = initialize(store, &config);
        pick(&mut state)
    });

    let status = report_outcome(outcome, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(status)
}

/// Runs the session with a terminal that is released before returning.
fn pick(state: &mut AppState) -> Result<Option<String>> {
    let mut surface = TtySurface::open()?;
    run_session(state, &mut surface)
}
