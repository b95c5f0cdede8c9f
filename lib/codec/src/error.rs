use rdf_transform_model::ModelError;
use thiserror::Error;

/// Errors raised while reading or writing template documents.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not JSON or does not have the template shape.
    #[error("Parse error: {0}")]
    Parse(String),
    /// A property has no predicate local part.
    #[error("Property at {path} has no local part")]
    MissingLocalPart { path: String },
    /// A property's predicate is not given as a constant.
    #[error("Property at {path} uses an unsupported '{kind}' predicate source")]
    UnsupportedPredicateSource { path: String, kind: String },
    /// A value source lacks the field its kind requires.
    #[error("Value source at {path} has no '{field}'")]
    IncompleteValueSource { path: String, field: &'static str },
    /// A literal declares both a datatype and a language tag.
    #[error("Literal at {path} declares both a datatype and a language")]
    InvalidLiteralType { path: String },
    /// The same prefix is declared twice.
    #[error("Prefix '{0}' is declared more than once")]
    DuplicatePrefix(String),
    /// The tree breaks a model invariant, for example a literal node with properties.
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A change record could not be read.
    #[error("Malformed change record: {0}")]
    MalformedChange(String),
}

pub type CodecResult<T> = Result<T, CodecError>;
