//! Error types for catalog construction and loading.

use std::path::PathBuf;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while building or loading an option catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// An option name was empty or started with a dash.
    #[error("Invalid option name '{0}': names are bare words without a leading dash")]
    InvalidName(String),

    /// A choice option was declared without any choices.
    #[error("Option '{0}' is a choice option but declares no choices")]
    MissingChoices(String),

    /// A non-choice option declared choices.
    #[error("Option '{name}' is a {kind} option and cannot declare choices")]
    UnexpectedChoices { name: String, kind: String },

    /// The same option name appeared twice across the catalog.
    #[error("Option '{name}' is declared in both '{first}' and '{second}'")]
    DuplicateOption {
        name: String,
        first: String,
        second: String,
    },

    /// Failed to read a catalog file.
    #[error("Failed to read catalog '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse catalog TOML.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

impl CatalogError {
    /// Creates a new `InvalidName` error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Creates a new `MissingChoices` error.
    pub fn missing_choices(name: impl Into<String>) -> Self {
        Self::MissingChoices(name.into())
    }

    /// Creates a new `UnexpectedChoices` error.
    pub fn unexpected_choices(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnexpectedChoices {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Creates a new `DuplicateOption` error.
    pub fn duplicate(
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateOption {
            name: name.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates a new `ReadFile` error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }
}
