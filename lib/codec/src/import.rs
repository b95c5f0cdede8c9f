use crate::{
    CodecError, CodecResult, NodeDocument, PropertyDocument, TransformDocument,
    ValueSourceDocument, ValueTypeDocument,
};
use rdf_transform_model::{
    LiteralType, ModelError, Node, Prefixes, Property, Transform, ValueSource, ValueType,
};
use tracing::warn;

/// Builds a transform from its document.
pub fn import_transform(document: &TransformDocument) -> CodecResult<Transform> {
    let mut prefixes = Prefixes::new();
    for prefix in &document.prefixes {
        prefixes
            .add(prefix.prefix.clone(), prefix.iri.clone())
            .map_err(|error| match error {
                ModelError::DuplicatePrefix(prefix) => CodecError::DuplicatePrefix(prefix),
                error => CodecError::Model(error),
            })?;
    }

    let subject_mappings = document
        .subject_mappings
        .iter()
        .enumerate()
        .map(|(index, node)| import_node_at(node, &format!("subjectMappings[{index}]")))
        .collect::<CodecResult<Vec<_>>>()?;

    Ok(Transform {
        base_iri: document.base_iri.clone(),
        prefixes,
        subject_mappings,
    })
}

/// Builds a node and its subtree from its document.
///
/// A literal node that declares properties is rejected.
pub fn import_node(document: &NodeDocument) -> CodecResult<Node> {
    import_node_at(document, "node")
}

/// Builds a property from its document.
///
/// The returned property always has an object node. Without `objectMappings` it is
/// [Node::default_object], otherwise it is the first mapping. Further mappings are ignored.
pub fn import_property(document: &PropertyDocument) -> CodecResult<Property> {
    import_property_at(document, "property")
}

fn import_node_at(document: &NodeDocument, path: &str) -> CodecResult<Node> {
    let value_type = import_value_type(&document.value_type, path)?;
    let value_source = import_value_source(&document.value_source, path)?;
    let property_documents = document.property_mappings.as_deref().unwrap_or_default();

    if value_type.is_literal() && !property_documents.is_empty() {
        return Err(ModelError::StructuralViolation {
            path: path.to_owned(),
        }
        .into());
    }

    let properties = property_documents
        .iter()
        .enumerate()
        .map(|(index, property)| {
            import_property_at(property, &format!("{path}.propertyMappings[{index}]"))
        })
        .collect::<CodecResult<Vec<_>>>()?;

    let mut node = Node::new(value_type, value_source);
    node.set_expanded(!properties.is_empty());
    node.set_properties(properties);
    Ok(node)
}

fn import_property_at(document: &PropertyDocument, path: &str) -> CodecResult<Property> {
    let local_part = match &document.value_source {
        ValueSourceDocument::Constant {
            constant: Some(constant),
        } => constant.clone(),
        ValueSourceDocument::Constant { constant: None } => {
            return Err(CodecError::MissingLocalPart {
                path: path.to_owned(),
            })
        }
        other => {
            return Err(CodecError::UnsupportedPredicateSource {
                path: path.to_owned(),
                kind: other.kind().to_owned(),
            })
        }
    };

    let object = match document.object_mappings.as_deref() {
        Some([first, rest @ ..]) => {
            if !rest.is_empty() {
                warn!(
                    path,
                    ignored = rest.len(),
                    "Only the first object mapping of a property is imported"
                );
            }
            import_node_at(first, &format!("{path}.objectMappings[0]"))?
        }
        _ => Node::default_object(),
    };

    Ok(Property::new(document.prefix.clone(), local_part).with_object(object))
}

fn import_value_type(document: &ValueTypeDocument, path: &str) -> CodecResult<ValueType> {
    Ok(match document {
        ValueTypeDocument::Iri => ValueType::Iri,
        ValueTypeDocument::Blank => ValueType::Blank,
        ValueTypeDocument::Literal { datatype, language } => {
            ValueType::Literal(match (datatype, language) {
                (None, None) => LiteralType::Plain,
                (Some(datatype), None) => LiteralType::Datatype(datatype.clone()),
                (None, Some(language)) => LiteralType::Language(language.clone()),
                (Some(_), Some(_)) => {
                    return Err(CodecError::InvalidLiteralType {
                        path: path.to_owned(),
                    })
                }
            })
        }
    })
}

fn import_value_source(document: &ValueSourceDocument, path: &str) -> CodecResult<ValueSource> {
    let missing = |field| CodecError::IncompleteValueSource {
        path: path.to_owned(),
        field,
    };
    Ok(match document {
        ValueSourceDocument::Column { column } => {
            ValueSource::Column(column.clone().ok_or_else(|| missing("column"))?)
        }
        ValueSourceDocument::Constant { constant } => {
            ValueSource::Constant(constant.clone().ok_or_else(|| missing("constant"))?)
        }
        ValueSourceDocument::Expression { expression, column } => ValueSource::Expression {
            expression: expression.clone().ok_or_else(|| missing("expression"))?,
            column: column.clone(),
        },
        ValueSourceDocument::Value => ValueSource::Value,
    })
}
