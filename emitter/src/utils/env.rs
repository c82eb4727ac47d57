//! Environment variable access for the emitter.
//!
//! Lookups go through the [`Environment`] trait rather than `std::env` directly,
//! so callers can hand the emitter the real process environment
//! ([`SystemEnvironment`]) or a synthetic one (any `HashMap<String, String>`).

use std::collections::HashMap;
use std::hash::BuildHasher;
use thiserror::Error;

/// Errors that can occur when reading a required environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvVarError {
    /// Environment variable is not set
    #[error("Required env var {name} is missing!")]
    NotFound { name: String },

    /// Environment variable is set but its value is not valid UTF-8
    #[error("Required env var {name} contains invalid UTF-8 characters!")]
    InvalidUtf8 { name: String },
}

impl EnvVarError {
    /// Name of the variable the error refers to.
    pub fn name(&self) -> &str {
        match self {
            EnvVarError::NotFound { name } | EnvVarError::InvalidUtf8 { name } => name,
        }
    }

    /// Operator-facing text, including what to do about it.
    pub fn user_message(&self) -> String {
        format!(
            "{self}\nSet {} in the environment and run again.",
            self.name()
        )
    }
}

/// Read access to a set of environment variables.
///
/// Presence is membership: a variable set to the empty string is present and
/// its value is returned unchanged. No trimming or coercion is applied.
pub trait Environment {
    /// Returns the raw value of `name`, or why it cannot be used.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the environment variable to read
    ///
    /// # Returns
    ///
    /// The value exactly as set, which may be empty
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError`] if:
    /// - The variable is not set ([`EnvVarError::NotFound`])
    /// - The variable's value is not valid UTF-8 ([`EnvVarError::InvalidUtf8`])
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use emitter::utils::env::{Environment, SystemEnvironment};
    ///
    /// match SystemEnvironment.var("AZURE_AAD_ID") {
    ///     Ok(client_id) => println!("Client id: {client_id}"),
    ///     Err(e) => eprintln!("{e}"),
    /// }
    /// ```
    fn var(&self, name: &str) -> Result<String, EnvVarError>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Result<String, EnvVarError> {
        match std::env::var(name) {
            Ok(value) => Ok(value),
            Err(std::env::VarError::NotPresent) => Err(EnvVarError::NotFound {
                name: name.to_string(),
            }),
            Err(std::env::VarError::NotUnicode(_)) => Err(EnvVarError::InvalidUtf8 {
                name: name.to_string(),
            }),
        }
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Result<String, EnvVarError> {
        self.get(name).cloned().ok_or_else(|| EnvVarError::NotFound {
            name: name.to_string(),
        })
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Result<String, EnvVarError> {
        (**self).var(name)
    }
}

/// Helpers built on top of [`Environment`].
pub struct EnvUtils;

impl EnvUtils {
    /// Reads every variable in `names`, in order.
    ///
    /// Stops at the first variable that is missing or unreadable and returns
    /// its error; later names are never looked up.
    ///
    /// # Arguments
    ///
    /// * `env` - The environment to read from
    /// * `names` - The variable names, in check order
    ///
    /// # Returns
    ///
    /// The values of `names`, position for position
    ///
    /// # Errors
    ///
    /// Returns the [`EnvVarError`] of the first unusable variable.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use emitter::utils::env::{EnvUtils, SystemEnvironment};
    ///
    /// match EnvUtils::require_all(&SystemEnvironment, ["AZURE_AAD_ID", "AAD_CLIENT_SECRET"]) {
    ///     Ok([client_id, _secret]) => println!("Client id: {client_id}"),
    ///     Err(e) => eprintln!("{}", e.user_message()),
    /// }
    /// ```
    pub fn require_all<E, const N: usize>(
        env: &E,
        names: [&str; N],
    ) -> Result<[String; N], EnvVarError>
    where
        E: Environment + ?Sized,
    {
        let mut values: [String; N] = std::array::from_fn(|_| String::new());
        for (slot, name) in values.iter_mut().zip(names) {
            *slot = env.var(name)?;
            log::debug!("Found required env var {name}");
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use std::cell::RefCell;

    /// Environment that records every lookup it receives.
    struct RecordingEnvironment {
        vars: HashMap<String, String>,
        lookups: RefCell<Vec<String>>,
    }

    impl RecordingEnvironment {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                vars: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                lookups: RefCell::new(Vec::new()),
            }
        }
    }

    impl Environment for RecordingEnvironment {
        fn var(&self, name: &str) -> Result<String, EnvVarError> {
            self.lookups.borrow_mut().push(name.to_string());
            self.vars.var(name)
        }
    }

    #[test]
    fn test_require_all_returns_values_in_order() {
        let env = RecordingEnvironment::new(&[("A", "1"), ("B", "2")]);
        let values = assert_ok!(EnvUtils::require_all(&env, ["A", "B"]));
        assert_eq!(values, ["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_require_all_stops_at_first_missing() {
        let env = RecordingEnvironment::new(&[]);
        let err = assert_err!(EnvUtils::require_all(&env, ["A", "B"]));

        assert_eq!(err, EnvVarError::NotFound { name: "A".to_string() });
        assert_eq!(*env.lookups.borrow(), vec!["A".to_string()]);
    }

    #[test]
    fn test_require_all_reports_second_when_first_present() {
        let env = RecordingEnvironment::new(&[("A", "1")]);
        let err = assert_err!(EnvUtils::require_all(&env, ["A", "B"]));
        assert_eq!(err.name(), "B");
    }

    #[test]
    fn test_empty_value_counts_as_present() {
        let env: HashMap<String, String> = [("A".to_string(), String::new())].into();
        let values = assert_ok!(EnvUtils::require_all(&env, ["A"]));
        assert_eq!(values, [String::new()]);
    }

    #[test]
    fn test_value_is_not_trimmed() {
        let env: HashMap<String, String> = [("A".to_string(), "  padded ".to_string())].into();
        assert_eq!(assert_ok!(env.var("A")), "  padded ");
    }

    #[test]
    fn test_error_messages_name_the_variable() {
        let missing = EnvVarError::NotFound {
            name: "AZURE_AAD_ID".to_string(),
        };
        assert_eq!(missing.to_string(), "Required env var AZURE_AAD_ID is missing!");
        assert!(missing.user_message().contains("Set AZURE_AAD_ID"));

        let invalid = EnvVarError::InvalidUtf8 {
            name: "AAD_CLIENT_SECRET".to_string(),
        };
        assert!(invalid.to_string().contains("AAD_CLIENT_SECRET"));
    }

    #[test]
    fn test_system_environment_reports_unset_variable() {
        let err = assert_err!(
            SystemEnvironment.var("REPOCLIENT_EMITTER_TEST_VARIABLE_THAT_IS_NEVER_SET")
        );
        assert!(matches!(err, EnvVarError::NotFound { .. }));
    }
}
