//! Errors raised at the edges of the aggregator.
//!
//! Bundle construction itself is total. Failures only arise when loading
//! configuration through Figment or when parsing a section token.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors produced while loading overrides or resolving section names.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Configuration could not be extracted from the supplied providers.
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<FigmentError>),

    /// A section token did not match any known section.
    #[error("unknown configuration section '{token}'")]
    UnknownSection {
        /// Token that failed to resolve.
        token: String,
    },
}

impl From<FigmentError> for ConfigError {
    fn from(err: FigmentError) -> Self {
        Self::Extract(Box::new(err))
    }
}

/// Result alias used by fallible configuration helpers.
pub type ConfigResult<T> = Result<T, ConfigError>;
