//! Presenting the catalog and capturing one user action
//!
//! A [`Presenter`] shows the ordered choices (plus an optional project path)
//! and blocks until it has exactly one answer: an index into the choices, or
//! a cancellation. It never decides what an index means; that belongs to the
//! selection controller.

use anyhow::{Context, Result};
use colored::Colorize;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use std::io::{BufRead, Write};

use crate::catalog::Choice;
use crate::config::DEFAULT_HEADER;
use crate::logging;

/// Words that cancel the prompt (compared case-insensitively)
pub const CANCEL_WORDS: &[&str] = &["q", "quit", "esc", "cancel"];

// =============================================================================
// Types
// =============================================================================

/// The one terminal event a presenter reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterEvent {
    /// Index into the choices that were presented. May be out of range.
    Selected(usize),
    Cancelled,
}

/// Shows choices and waits for a single decision
pub trait Presenter {
    fn present(&mut self, choices: &[Choice], context: Option<&str>) -> Result<PresenterEvent>;
}

// =============================================================================
// Terminal prompt
// =============================================================================

/// Numbered menu on a writer, one answer line from a reader.
///
/// In the binary the writer is stderr so that stdout stays reserved for the
/// chosen identifier.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    header: String,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            header: DEFAULT_HEADER.to_string(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    fn render(&mut self, choices: &[Choice], context: Option<&str>) -> Result<()> {
        writeln!(self.output, "{}", self.header.bold())?;
        if let Some(path) = context.filter(|p| !p.is_empty()) {
            writeln!(self.output, "{}", format!("Project: {}", path).dimmed())?;
        }
        writeln!(self.output)?;

        for (index, choice) in choices.iter().enumerate() {
            writeln!(
                self.output,
                "  {} {}",
                format!("{})", index + 1).cyan(),
                choice.title.bold()
            )?;
            writeln!(self.output, "     {}", choice.description.dimmed())?;
        }

        write!(
            self.output,
            "\nSelect [1-{}, q to cancel]: ",
            choices.len()
        )?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPrompt<R, W> {
    fn present(&mut self, choices: &[Choice], context: Option<&str>) -> Result<PresenterEvent> {
        self.render(choices, context)
            .context("Failed to show the mode menu")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read the selection")?;

        if read == 0 {
            // EOF: keep the shell prompt off the menu line
            writeln!(self.output)?;
            logging::debug("presentation", "input closed before an answer");
            return Ok(PresenterEvent::Cancelled);
        }

        let event = parse_answer(&line, choices);
        logging::debug(
            "presentation",
            &format!("answer {:?} -> {:?}", line.trim(), event),
        );
        Ok(event)
    }
}

/// Interpret one line typed at the prompt.
///
/// A 1-based number maps to its index without a range check; the controller
/// treats out-of-range indices as a cancellation. There is no re-prompt:
/// anything unrecognised cancels.
pub fn parse_answer(answer: &str, choices: &[Choice]) -> PresenterEvent {
    let answer = answer.trim();

    if answer.is_empty() || CANCEL_WORDS.iter().any(|w| answer.eq_ignore_ascii_case(w)) {
        return PresenterEvent::Cancelled;
    }

    if let Ok(number) = answer.parse::<usize>() {
        return match number.checked_sub(1) {
            Some(index) => PresenterEvent::Selected(index),
            None => PresenterEvent::Cancelled,
        };
    }

    match choices.iter().position(|c| c.identifier == answer) {
        Some(index) => PresenterEvent::Selected(index),
        None => PresenterEvent::Cancelled,
    }
}

// =============================================================================
// Arrow-key picker
// =============================================================================

/// Arrow-key list drawn on a terminal. Enter picks, Esc or `q` cancels.
///
/// Only usable when a human is at the terminal; piped runs get a
/// [`TerminalPrompt`] instead.
pub struct MenuPicker {
    term: Term,
    header: String,
}

impl MenuPicker {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            header: DEFAULT_HEADER.to_string(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }
}

/// One picker row: title column, then the description
pub fn menu_label(choice: &Choice) -> String {
    format!("{:<28} {}", choice.title, choice.description)
}

impl Presenter for MenuPicker {
    fn present(&mut self, choices: &[Choice], context: Option<&str>) -> Result<PresenterEvent> {
        self.term
            .write_line(&self.header.bold().to_string())
            .context("Failed to show the mode menu")?;
        if let Some(path) = context.filter(|p| !p.is_empty()) {
            self.term
                .write_line(&format!("Project: {}", path).dimmed().to_string())
                .context("Failed to show the mode menu")?;
        }

        let labels: Vec<String> = choices.iter().map(menu_label).collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Launch mode")
            .items(&labels)
            .default(0)
            .interact_on_opt(&self.term)
            .context("Mode picker failed")?;

        logging::debug("presentation", &format!("picker -> {:?}", picked));
        Ok(match picked {
            Some(index) => PresenterEvent::Selected(index),
            None => PresenterEvent::Cancelled,
        })
    }
}

// =============================================================================
// Preselected
// =============================================================================

/// Answers with a mode named up front (`--mode`), showing nothing
#[derive(Debug, Clone)]
pub struct Preselected {
    identifier: String,
}

impl Preselected {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Presenter for Preselected {
    fn present(&mut self, choices: &[Choice], _context: Option<&str>) -> Result<PresenterEvent> {
        let event = match choices.iter().position(|c| c.identifier == self.identifier) {
            Some(index) => PresenterEvent::Selected(index),
            None => {
                logging::debug(
                    "presentation",
                    &format!("unknown preselected mode {:?}", self.identifier),
                );
                PresenterEvent::Cancelled
            }
        };
        Ok(event)
    }
}
