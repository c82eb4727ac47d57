//! # Repository Client Config Emitter
//!
//! Core library for staging Azure AD client credentials into the `config.json`
//! file consumed by the repository client. The emitter validates that the
//! required environment variables are present, merges them with the fixed
//! repository service settings, and writes the result as JSON.
//!
//! ## Modules
//!
//! - [`constants`] - Environment variable names and fixed repository settings
//! - [`emitter`] - The validate/build/write sequence
//! - [`repo_config`] - The serialized configuration record
//! - [`utils`] - Environment access abstraction and helpers

pub mod constants;
pub mod emitter;
pub mod repo_config;
pub mod utils;

pub use emitter::{ConfigEmitter, EmitError};
pub use repo_config::{ClientCredentials, RepoClientConfig};
pub use utils::env::{EnvVarError, Environment, SystemEnvironment};
