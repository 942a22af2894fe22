pub mod catalog;
pub mod config;
pub mod logging;
pub mod paths;
pub mod presentation;
pub mod selection;

// Re-export commonly used types
pub use catalog::LaunchMode;
pub use config::Config;
pub use selection::SelectionResult;
