//! Converts [Transform] trees to and from the portable RDF Transform template JSON document.
//!
//! Export keeps the document minimal. Absent prefixes, empty property lists and missing object
//! nodes are omitted, and incomplete properties are skipped. Import fills the omitted parts with
//! their defaults, so that `parse(serialize(t)) == t` for every valid tree without incomplete
//! properties.

mod change;
mod document;
mod error;
mod export;
mod import;

pub use change::TransformChange;
pub use document::*;
pub use error::*;
pub use export::{export_node, export_property, export_transform};
pub use import::{import_node, import_property, import_transform};

use rdf_transform_model::Transform;

/// Parses a template document.
pub fn parse(text: &str) -> CodecResult<Transform> {
    let document: TransformDocument =
        serde_json::from_str(text).map_err(|error| CodecError::Parse(error.to_string()))?;
    import_transform(&document)
}

/// Serializes `transform` as a compact template document.
///
/// Fails with a structural violation if any node in the tree is a literal that declares
/// properties.
pub fn serialize(transform: &Transform) -> CodecResult<String> {
    transform.validate()?;
    Ok(serde_json::to_string(&export_transform(transform))?)
}

/// Serializes `transform` as an indented template document.
pub fn serialize_pretty(transform: &Transform) -> CodecResult<String> {
    transform.validate()?;
    Ok(serde_json::to_string_pretty(&export_transform(transform))?)
}

/// Replaces `target` with the transform parsed from `text`.
///
/// On failure `target` is left untouched.
pub fn import_into(target: &mut Transform, text: &str) -> CodecResult<()> {
    *target = parse(text)?;
    Ok(())
}
