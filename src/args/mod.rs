//! Command-line argument parsing and handling.

pub mod definition;
pub mod list;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use definition::{Args, ArgsOutcome, process_args};
pub use utils::determine_log_level;
