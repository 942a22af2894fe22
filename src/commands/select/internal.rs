//! Internal implementation for select command
//!
//! Handles the flow: config → presenter → one selection → stdout + exit code

use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use console::Term;
use mode_selector::config::Config;
use mode_selector::logging;
use mode_selector::presentation::{MenuPicker, Preselected, Presenter, TerminalPrompt};
use mode_selector::selection::{self, SelectionResult, EXIT_NO_SELECTION};
use mode_selector::LaunchMode;

use super::SelectOptions;

/// Whoever flips this first owns the outcome: the signal handler (exit 1)
/// or the main flow (emit). Held across the exit / the stdout write.
static FINISHED: Mutex<bool> = Mutex::new(false);

fn finished() -> MutexGuard<'static, bool> {
    FINISHED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Main select entry point
pub fn select<W: Write>(options: SelectOptions, out: &mut W) -> i32 {
    let context = options.project_path.as_deref();
    logging::debug("select", &format!("context = {:?}", context));

    match options.mode {
        Some(identifier) => {
            logging::debug("select", &format!("preselected mode {:?}", identifier));
            let result =
                selection::run(&mut Preselected::new(identifier), LaunchMode::ALL, context);
            report(result, out)
        }
        None => interactive(context, out),
    }
}

fn interactive<W: Write>(context: Option<&str>, out: &mut W) -> i32 {
    let config = Config::load();
    let term = Term::stderr();
    colored::control::set_override(config.color.enabled(term.is_term()));
    install_cancel_handler();

    let mut presenter: Box<dyn Presenter> = if io::stdin().is_terminal() && term.is_term() {
        logging::debug("select", "using arrow-key picker");
        Box::new(MenuPicker::new(term).with_header(config.header))
    } else {
        Box::new(TerminalPrompt::new(io::stdin().lock(), io::stderr()).with_header(config.header))
    };
    let result = selection::run(presenter.as_mut(), LaunchMode::ALL, context);

    let mut done = finished();
    if *done {
        // A signal got there first and is already exiting
        return EXIT_NO_SELECTION;
    }
    *done = true;
    report(result, out)
}

fn report<W: Write>(result: SelectionResult, out: &mut W) -> i32 {
    logging::debug("select", &format!("result = {:?}", result));
    selection::emit(result, out)
}

/// Ctrl-C, SIGTERM or SIGHUP while the menu is waiting is a cancellation,
/// not a signal death
fn install_cancel_handler() {
    let installed = ctrlc::set_handler(|| {
        let mut done = finished();
        if *done {
            return;
        }
        *done = true;

        // The picker hides the cursor while it draws
        let _ = Term::stderr().show_cursor();
        eprintln!();
        std::process::exit(EXIT_NO_SELECTION);
    });

    if let Err(e) = installed {
        logging::debug("select", &format!("signal handler not installed: {}", e));
    }
}
