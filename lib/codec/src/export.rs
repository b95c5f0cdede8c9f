use crate::{
    NodeDocument, PrefixDocument, PropertyDocument, TransformDocument, ValueSourceDocument,
    ValueTypeDocument,
};
use rdf_transform_model::{Node, Property, Transform, ValueSource, ValueType};
use tracing::{debug, warn};

/// Exports a whole transform.
///
/// Subject nodes that break the literal-leaf invariant are left out, see [export_node].
/// [serialize](crate::serialize) validates the tree first and reports such nodes instead.
pub fn export_transform(transform: &Transform) -> TransformDocument {
    TransformDocument {
        base_iri: transform.base_iri.clone(),
        prefixes: transform
            .prefixes
            .iter()
            .map(|prefix| PrefixDocument {
                prefix: prefix.prefix.clone(),
                iri: prefix.iri.clone(),
            })
            .collect(),
        subject_mappings: transform
            .subject_mappings
            .iter()
            .enumerate()
            .filter_map(|(index, node)| export_node_at(node, &format!("subjectMappings[{index}]")))
            .collect(),
    }
}

/// Exports a node and its subtree.
///
/// Returns `None` if the node is a literal that declares properties.
pub fn export_node(node: &Node) -> Option<NodeDocument> {
    export_node_at(node, "node")
}

/// Exports a property.
///
/// Returns `None` for an incomplete property. An object node that cannot be exported leaves
/// the property without `objectMappings`.
pub fn export_property(property: &Property) -> Option<PropertyDocument> {
    export_property_at(property, "property")
}

fn export_node_at(node: &Node, path: &str) -> Option<NodeDocument> {
    if node.value_type().is_literal() && node.has_properties() {
        warn!(path, "Dropping literal node that declares properties");
        return None;
    }

    let property_mappings: Vec<_> = node
        .properties()
        .iter()
        .enumerate()
        .filter_map(|(index, property)| {
            export_property_at(property, &format!("{path}.propertyMappings[{index}]"))
        })
        .collect();

    Some(NodeDocument {
        value_type: export_value_type(node.value_type()),
        value_source: export_value_source(node.value_source()),
        property_mappings: (!property_mappings.is_empty()).then_some(property_mappings),
    })
}

fn export_property_at(property: &Property, path: &str) -> Option<PropertyDocument> {
    let Some(local_part) = property.local_part() else {
        debug!(path, "Skipping property without local part");
        return None;
    };

    // Predicates are always rendered as constants in this format version.
    let value_source = ValueSourceDocument::Constant {
        constant: Some(local_part.to_owned()),
    };

    let object_mappings = property
        .object()
        .and_then(|object| export_node_at(object, &format!("{path}.objectMappings[0]")))
        .map(|object| vec![object]);

    Some(PropertyDocument {
        prefix: property.prefix().map(ToOwned::to_owned),
        value_source,
        object_mappings,
    })
}

fn export_value_type(value_type: &ValueType) -> ValueTypeDocument {
    match value_type {
        ValueType::Iri => ValueTypeDocument::Iri,
        ValueType::Literal(literal_type) => ValueTypeDocument::Literal {
            datatype: literal_type.datatype().map(ToOwned::to_owned),
            language: literal_type.language().map(ToOwned::to_owned),
        },
        ValueType::Blank => ValueTypeDocument::Blank,
    }
}

fn export_value_source(value_source: &ValueSource) -> ValueSourceDocument {
    match value_source {
        ValueSource::Column(column) => ValueSourceDocument::Column {
            column: Some(column.clone()),
        },
        ValueSource::Constant(constant) => ValueSourceDocument::Constant {
            constant: Some(constant.clone()),
        },
        ValueSource::Expression { expression, column } => ValueSourceDocument::Expression {
            expression: Some(expression.clone()),
            column: column.clone(),
        },
        ValueSource::Value => ValueSourceDocument::Value,
    }
}
