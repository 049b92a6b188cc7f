//! Error types for the textfill crate.

use thiserror::Error;

/// Errors raised when compiling or evaluating a template.
///
/// Every variant is a caller-input error; the engine itself has no internal
/// failure modes. All errors are immediate and synchronous, and evaluation
/// is all-or-nothing: no partially substituted output is ever returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// The template text contains the same placeholder literal more than once.
    ///
    /// Raised only at construction. Unrecoverable for that text; the caller
    /// must fix the template.
    #[error("malformed template: duplicate placeholder '{0}'")]
    MalformedTemplate(String),

    /// The supplied parameter count does not match the placeholder count.
    #[error("incomplete parameters: expected {expected}, got {supplied}")]
    IncompleteParameters { expected: usize, supplied: usize },

    /// A supplied value contains a character outside the word-character
    /// class (ASCII letters, digits, underscore).
    #[error("invalid parameter value '{0}': only letters, digits, and underscore are allowed")]
    InvalidParameterValue(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
