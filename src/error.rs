//! Error types for the alkire-foster library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum MpiError {
    #[error("Alignment error ({context}): expected {expected}, got {actual}")]
    Alignment {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("No cutoff/weight entry for dimension '{0}'")]
    MissingDimension(String),

    #[error("Dimension '{0}' is not a column of the achievement matrix")]
    UnknownDimension(String),

    #[error("Duplicate name '{0}'")]
    DuplicateName(String),

    #[error("Missing column '{0}' in demographics")]
    MissingColumn(String),

    #[error("Empty population: headcount ratio needs at least one individual")]
    EmptyPopulation,

    #[error("No poor individuals: {0}")]
    NoPoorIndividuals(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MpiError {
    /// Shorthand for an alignment failure.
    pub fn alignment(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        MpiError::Alignment {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Whether this error is a domain condition that callers usually handle
    /// (as opposed to a configuration or serialization failure).
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            MpiError::Alignment { .. }
                | MpiError::MissingDimension(_)
                | MpiError::UnknownDimension(_)
                | MpiError::EmptyPopulation
                | MpiError::NoPoorIndividuals(_)
        )
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, MpiError>;
