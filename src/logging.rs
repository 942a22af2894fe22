//! Debug logging
//!
//! Off unless `MODE_SELECTOR_LOG` is set. Everything goes to stderr: stdout
//! carries the selected identifier and nothing else.

/// Environment variable that turns debug logging on
pub const LOG_ENV_VAR: &str = "MODE_SELECTOR_LOG";

/// Whether debug logging is enabled for this process
pub fn enabled() -> bool {
    std::env::var_os(LOG_ENV_VAR).is_some()
}

/// Write a debug line tagged with the calling module
pub fn debug(module: &str, msg: &str) {
    if enabled() {
        eprintln!("[DEBUG {}] {}", module, msg);
    }
}
