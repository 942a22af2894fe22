//! Select command - choose how a project is launched
//!
//! Prints the chosen mode identifier on stdout for a launcher script to act
//! on. Exit code 0 means a mode was printed, 1 means nothing was chosen.
//!
//! # Usage
//!
//! ```bash
//! mode=$(mode-selector ~/src/project) || exit 0   # interactive menu
//! mode-selector --mode tmux-nvim                  # skip the menu
//! mode-selector -odd-dir-name                     # paths may start with '-'
//! ```

use std::io::Write;

mod internal;

/// Select options
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    /// Project path shown above the menu. Display only, lossily decoded.
    pub project_path: Option<String>,
    /// Mode identifier that replaces the interactive menu
    pub mode: Option<String>,
}

/// Execute the select command, writing the identifier (if any) to `out` and
/// returning the process exit code
pub fn execute<W: Write>(options: SelectOptions, out: &mut W) -> i32 {
    internal::select(options, out)
}
