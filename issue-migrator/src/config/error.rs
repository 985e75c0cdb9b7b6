//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating a migration plan.
///
/// Every variant is raised before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse plan file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },

    /// No repositories were given.
    #[error("no github repos specified")]
    EmptyRepositories,

    /// No repository owner was given.
    #[error("no github owner specified")]
    MissingOwner,

    /// A credential required for live mode is empty.
    #[error("missing credential: {name} is required when dry run is disabled")]
    MissingCredential { name: &'static str },

    /// A field holds an unusable value.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },

    /// A URL could not be parsed.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
