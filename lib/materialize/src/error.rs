use rdf_transform_model::ModelError;
use thiserror::Error;

/// Errors raised while generating triples.
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// The base IRI, a predicate or a datatype is not a valid IRI.
    #[error("Invalid IRI '{iri}': {message}")]
    InvalidIri { iri: String, message: String },
    /// A predicate or datatype uses a prefix the template does not bind.
    #[error("Prefix '{0}' is not defined")]
    UnknownPrefix(String),
    #[error("Unsupported expression '{0}'")]
    UnsupportedExpression(String),
    #[error("Invalid language tag '{tag}': {message}")]
    InvalidLanguageTag { tag: String, message: String },
    /// The template breaks a model invariant.
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type MaterializeResult<T> = Result<T, MaterializeError>;
