//! Selection controller
//!
//! Runs exactly one round of choose-or-cancel and turns it into the
//! process contract:
//!
//! - chosen: the mode identifier as the only stdout line, exit code 0
//! - anything else: no stdout, exit code 1
//!
//! There is no error class beyond "no selection". Presenter failures,
//! out-of-range indices and an empty catalog all end up as [`SelectionResult::Cancelled`].

use std::io::Write;

use crate::catalog::{self, LaunchMode};
use crate::logging;
use crate::presentation::{Presenter, PresenterEvent};

/// Exit code when a mode was chosen and printed
pub const EXIT_CHOSEN: i32 = 0;
/// Exit code for cancel, dismissal, or any failure
pub const EXIT_NO_SELECTION: i32 = 1;

// =============================================================================
// Types
// =============================================================================

/// Outcome of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionResult {
    Chosen(LaunchMode),
    Cancelled,
}

impl SelectionResult {
    /// Identifier to print, only for a chosen mode
    pub fn identifier(&self) -> Option<&'static str> {
        match self {
            SelectionResult::Chosen(mode) => Some(mode.identifier()),
            SelectionResult::Cancelled => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SelectionResult::Chosen(_) => EXIT_CHOSEN,
            SelectionResult::Cancelled => EXIT_NO_SELECTION,
        }
    }
}

/// A selection still waiting for its one decision.
///
/// `choose` and `cancel` consume it, so a resolved selection cannot be
/// resolved again.
#[derive(Debug)]
pub struct Selection<'a> {
    catalog: &'a [LaunchMode],
}

impl<'a> Selection<'a> {
    pub fn awaiting(catalog: &'a [LaunchMode]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a [LaunchMode] {
        self.catalog
    }

    pub fn choose(self, index: usize) -> SelectionResult {
        match self.catalog.get(index) {
            Some(mode) => SelectionResult::Chosen(*mode),
            None => {
                // Presenters only offer catalog positions; reaching this is a wiring bug
                logging::debug(
                    "selection",
                    &format!(
                        "index {} outside catalog of {}, treating as cancel",
                        index,
                        self.catalog.len()
                    ),
                );
                SelectionResult::Cancelled
            }
        }
    }

    pub fn cancel(self) -> SelectionResult {
        SelectionResult::Cancelled
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Present the catalog once and resolve the answer
pub fn run<P>(presenter: &mut P, catalog: &[LaunchMode], context: Option<&str>) -> SelectionResult
where
    P: Presenter + ?Sized,
{
    let selection = Selection::awaiting(catalog);

    if catalog.is_empty() {
        logging::debug("selection", "empty catalog, nothing to present");
        return selection.cancel();
    }

    let choices = catalog::choices(catalog);
    match presenter.present(&choices, context) {
        Ok(PresenterEvent::Selected(index)) => selection.choose(index),
        Ok(PresenterEvent::Cancelled) => selection.cancel(),
        Err(e) => {
            logging::debug("selection", &format!("presenter failed: {:#}", e));
            selection.cancel()
        }
    }
}

/// Write the result to `out` and return the exit code.
///
/// The identifier and its newline go out in a single write followed by a
/// flush. If that fails the run counts as no selection.
pub fn emit<W: Write>(result: SelectionResult, out: &mut W) -> i32 {
    let Some(identifier) = result.identifier() else {
        return EXIT_NO_SELECTION;
    };

    let line = format!("{}\n", identifier);
    match out.write_all(line.as_bytes()).and_then(|_| out.flush()) {
        Ok(()) => result.exit_code(),
        Err(e) => {
            logging::debug("selection", &format!("failed to write result: {}", e));
            EXIT_NO_SELECTION
        }
    }
}
