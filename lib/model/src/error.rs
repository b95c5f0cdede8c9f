use thiserror::Error;

/// Errors raised while building or checking a transform tree.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A literal node declares outgoing properties. Literals are leaves.
    #[error("Literal node at {path} must not declare properties")]
    StructuralViolation { path: String },
    /// A prefix is bound twice.
    #[error("Prefix '{0}' is already defined")]
    DuplicatePrefix(String),
    /// A prefix is bound to something that is not an absolute IRI.
    #[error("Namespace '{namespace}' of prefix '{prefix}' is not a valid IRI: {message}")]
    InvalidNamespace {
        prefix: String,
        namespace: String,
        message: String,
    },
    /// A prefixed name uses a prefix that is not bound.
    #[error("Prefix '{0}' is not defined")]
    UnknownPrefix(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
