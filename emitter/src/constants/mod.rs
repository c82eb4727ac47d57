//! Centralized constants shared by the emitter and the binary.

pub mod env_vars;
pub mod repository;

/// Name of the file written to the current working directory.
pub const OUTPUT_FILE: &str = "config.json";

/// Process exit status used when a required variable is missing or unreadable.
pub const MISSING_INPUT_EXIT_CODE: i32 = 1;
