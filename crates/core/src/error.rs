//! Path error model.

use thiserror::Error;

/// Result type used by the path primitives.
pub type PathResult<T> = Result<T, PathError>;

/// Error raised while parsing a route path pattern.
///
/// These are authoring mistakes in a route declaration; concrete navigation
/// paths never fail to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A pattern declared more than one `:param` segment.
    #[error("pattern '{pattern}' declares more than one parameter segment")]
    MultipleParameters { pattern: String },

    /// A `:` segment without a name.
    #[error("pattern '{pattern}' has a parameter segment without a name")]
    EmptyParameterName { pattern: String },
}

impl PathError {
    pub fn multiple_parameters(pattern: impl Into<String>) -> Self {
        Self::MultipleParameters {
            pattern: pattern.into(),
        }
    }

    pub fn empty_parameter_name(pattern: impl Into<String>) -> Self {
        Self::EmptyParameterName {
            pattern: pattern.into(),
        }
    }
}
