//! Launch mode catalog
//!
//! The fixed, ordered set of ways a project can be opened. The identifier of
//! each mode is the contract with launcher scripts, so identifiers never
//! change once shipped. Declaration order is presentation order.
//!
//! # Example
//!
//! ```
//! use mode_selector::catalog::LaunchMode;
//!
//! let mode = LaunchMode::from_identifier("tmux-nvim").unwrap();
//! assert_eq!(mode.title(), "Tmux + Neovim");
//! assert_eq!(mode.position(), 3);
//! ```

use std::fmt;

// =============================================================================
// Types
// =============================================================================

/// Launch mode identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchMode {
    TerminalOnly,
    TerminalTmux,
    TmuxSession,
    TmuxNvim,
    TmuxNvimClaude,
}

impl LaunchMode {
    /// Every mode, in presentation order.
    pub const ALL: &'static [LaunchMode] = &[
        LaunchMode::TerminalOnly,
        LaunchMode::TerminalTmux,
        LaunchMode::TmuxSession,
        LaunchMode::TmuxNvim,
        LaunchMode::TmuxNvimClaude,
    ];

    pub fn identifier(&self) -> &'static str {
        match self {
            LaunchMode::TerminalOnly => "terminal-only",
            LaunchMode::TerminalTmux => "terminal-tmux",
            LaunchMode::TmuxSession => "tmux-session",
            LaunchMode::TmuxNvim => "tmux-nvim",
            LaunchMode::TmuxNvimClaude => "tmux-nvim-claude",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LaunchMode::TerminalOnly => "Terminal (Ghostty)",
            LaunchMode::TerminalTmux => "Terminal + Tmux",
            LaunchMode::TmuxSession => "Tmux Session",
            LaunchMode::TmuxNvim => "Tmux + Neovim",
            LaunchMode::TmuxNvimClaude => "Tmux + Neovim + Claude Code",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LaunchMode::TerminalOnly => "Only a terminal in the chosen directory",
            LaunchMode::TerminalTmux => "Terminal with tmux running (no named session)",
            LaunchMode::TmuxSession => "Named tmux session, reattachable",
            LaunchMode::TmuxNvim => "Tmux session with Neovim auto-started",
            LaunchMode::TmuxNvimClaude => {
                "Session with Neovim and an assistant tool in separate windows"
            }
        }
    }

    /// Exact, case-sensitive lookup. Launcher scripts match on the token
    /// byte for byte, so no normalisation happens here.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.identifier() == identifier)
    }

    /// Zero-based index in catalog order
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|mode| mode == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// What a presenter shows for one catalog entry.
///
/// `identifier` lets a presenter accept a typed token; presenters still
/// report selections by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub identifier: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<LaunchMode> for Choice {
    fn from(mode: LaunchMode) -> Self {
        Self {
            identifier: mode.identifier(),
            title: mode.title(),
            description: mode.description(),
        }
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Presentation view of a catalog, order preserved
pub fn choices(catalog: &[LaunchMode]) -> Vec<Choice> {
    catalog.iter().copied().map(Choice::from).collect()
}
