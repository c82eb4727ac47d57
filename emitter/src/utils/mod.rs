//! # Emitter Utilities
//!
//! The [`env`] module provides the [`env::Environment`] abstraction used to read
//! the required variables, plus [`env::EnvUtils`] for ordered, fail-fast
//! validation:
//!
//! ```no_run
//! use emitter::utils::env::{EnvUtils, SystemEnvironment};
//!
//! let values = EnvUtils::require_all(&SystemEnvironment, ["AZURE_AAD_ID", "AAD_CLIENT_SECRET"])?;
//! # Ok::<(), emitter::EnvVarError>(())
//! ```
//!
//! The [`json`] module holds the formatter used to write the config file.

pub mod env;
pub mod json;
