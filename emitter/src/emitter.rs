//! The validate, build, serialize, write sequence.

use crate::constants::env_vars::REQUIRED_VARS;
use crate::repo_config::{ClientCredentials, RepoClientConfig};
use crate::utils::env::{EnvUtils, EnvVarError, Environment};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while emitting the repository client config.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A required environment variable is missing or unreadable
    #[error(transparent)]
    MissingInput(#[from] EnvVarError),

    #[error("Failed to serialize repository client config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Emits `config.json` from an injected [`Environment`].
///
/// # Examples
///
/// ```no_run
/// use emitter::{ConfigEmitter, SystemEnvironment};
/// use emitter::constants::OUTPUT_FILE;
///
/// let emitter = ConfigEmitter::new(SystemEnvironment);
/// emitter.emit_to(OUTPUT_FILE)?;
/// # Ok::<(), emitter::EmitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigEmitter<E> {
    env: E,
}

impl<E: Environment> ConfigEmitter<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Validates the required variables and returns the credentials they hold.
    ///
    /// Variables are checked in the order `AZURE_AAD_ID`, `AAD_CLIENT_SECRET`;
    /// the first unusable one is reported and the rest are not looked up.
    pub fn credentials(&self) -> Result<ClientCredentials, EnvVarError> {
        let [client_id, client_secret] = EnvUtils::require_all(&self.env, REQUIRED_VARS)?;
        Ok(ClientCredentials::new(client_id, client_secret))
    }

    /// Validates the environment, then writes the record to `path`.
    ///
    /// Nothing is written when validation fails, so an existing file at `path`
    /// is left as it was. On success any existing file is replaced.
    pub fn emit_to(&self, path: impl AsRef<Path>) -> Result<RepoClientConfig, EmitError> {
        let credentials = self.credentials()?;
        let config = RepoClientConfig::new(&credentials);
        write_config(path.as_ref(), &config)?;
        Ok(config)
    }
}

/// Serializes `config` and writes it to `path`, replacing any existing file.
pub fn write_config(path: &Path, config: &RepoClientConfig) -> Result<(), EmitError> {
    let contents = config.to_json()?;
    fs::write(path, contents.as_slice()).map_err(|source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Wrote repository client config for client {} to {}",
        config.client_id(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::env_vars::{AAD_CLIENT_SECRET, AZURE_AAD_ID};
    use claims::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_credentials_from_complete_environment() {
        let emitter = ConfigEmitter::new(env(&[(AZURE_AAD_ID, "abc123"), (AAD_CLIENT_SECRET, "s3cr3t")]));
        let credentials = assert_ok!(emitter.credentials());
        assert_eq!(credentials.client_id(), "abc123");
        assert_eq!(credentials.client_secret(), "s3cr3t");
    }

    #[test]
    fn test_credentials_report_first_missing_variable() {
        let cases = [
            (env(&[]), AZURE_AAD_ID),
            (env(&[(AAD_CLIENT_SECRET, "s3cr3t")]), AZURE_AAD_ID),
            (env(&[(AZURE_AAD_ID, "abc123")]), AAD_CLIENT_SECRET),
        ];

        for (environment, expected) in cases {
            let err = assert_err!(ConfigEmitter::new(environment).credentials());
            assert_eq!(err.name(), expected);
        }
    }

    #[test]
    fn test_missing_input_is_classified() {
        let err = EmitError::from(EnvVarError::NotFound {
            name: AZURE_AAD_ID.to_string(),
        });
        assert!(matches!(err, EmitError::MissingInput(_)));
        assert_eq!(err.to_string(), "Required env var AZURE_AAD_ID is missing!");
    }

    #[test]
    fn test_write_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("config.json");
        let emitter = ConfigEmitter::new(env(&[(AZURE_AAD_ID, "a"), (AAD_CLIENT_SECRET, "b")]));

        let err = assert_err!(emitter.emit_to(&path));
        assert!(matches!(err, EmitError::Write { .. }));
        assert!(err.to_string().contains("missing-dir"));
    }
}
