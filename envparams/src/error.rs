use std::{error::Error as StdError, fmt};

use thiserror::Error;

use super::BoxError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Mandatory environment variable {env_var} not set")]
    MissingEnv { env_var: String },
    #[error("Failed to parse '{env_var}'=\"{value}\": {error}")]
    ParseError {
        env_var: String,
        value: String,
        error: BoxError,
    },
}

impl ConfigError {
    /// The full (prefixed) name of the environment variable at fault.
    pub fn env_var(&self) -> &str {
        match self {
            Self::MissingEnv { env_var } | Self::ParseError { env_var, .. } => env_var,
        }
    }
}

/// A collection of configuration errors encountered while validating a
/// [`Registry`](crate::Registry).
///
/// Validation collects every problem rather than stopping at the first one,
/// so that all missing variables can be fixed at once.
///
/// # Display Format
///
/// ```text
/// 2 configuration errors:
///   1. Mandatory environment variable APP_DATABASE_URL not set
///   2. Mandatory environment variable APP_TOKEN not set
/// ```
#[derive(Debug, Default)]
pub struct ConfigErrors(Vec<ConfigError>);

impl ConfigErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ConfigError) {
        self.0.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigError> {
        self.0.iter()
    }

    /// Names of the variables reported as missing, in the order they were
    /// found.
    pub fn missing_env_vars(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter_map(|e| match e {
                ConfigError::MissingEnv { env_var } => Some(env_var.as_str()),
                ConfigError::ParseError { .. } => None,
            })
            .collect()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            1 => writeln!(f, "1 configuration error:")?,
            n => writeln!(f, "{n} configuration errors:")?,
        }

        for (i, error) in self.0.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl StdError for ConfigErrors {}

/// Why [`Registry::try_parse_from`](crate::Registry::try_parse_from) did not
/// let the program continue.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The first argument asked for usage information. Not a configuration
    /// problem, but the program should still stop.
    #[error("usage requested with `{argument}`")]
    HelpRequested { argument: String },
    #[error(transparent)]
    Invalid(#[from] ConfigErrors),
}
