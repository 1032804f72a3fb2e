use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse enum config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid enum config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl ConfigError {
    /// Validation messages, if this is a validation failure.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Invalid(messages) => messages,
            _ => &[],
        }
    }
}

impl From<ConfigError> for modstate_core::Error {
    fn from(err: ConfigError) -> Self {
        Self::definition(err.to_string())
    }
}
