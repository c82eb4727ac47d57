//! # configure-repoclient
//!
//! Process-level pieces of the `configure-repoclient` binary: ambient settings
//! and logging. The config emission itself lives in the `emitter` crate.
//!
//! - [`logger`] - Logging configuration and setup
//! - [`settings`] - `REPOCLIENT__*` settings loading
//!
//! This library interface enables testing of the binary's setup code.

pub mod logger;
pub mod settings;
