use serde::{Deserialize, Serialize};

/// The wire form of a [Transform](rdf_transform_model::Transform).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformDocument {
    #[serde(rename = "baseIRI", default)]
    pub base_iri: String,
    #[serde(default)]
    pub prefixes: Vec<PrefixDocument>,
    #[serde(default)]
    pub subject_mappings: Vec<NodeDocument>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixDocument {
    pub prefix: String,
    pub iri: String,
}

/// The wire form of a [Node](rdf_transform_model::Node).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDocument {
    pub value_type: ValueTypeDocument,
    pub value_source: ValueSourceDocument,
    /// Omitted when the node has no properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_mappings: Option<Vec<PropertyDocument>>,
}

/// The wire form of a [Property](rdf_transform_model::Property).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub value_source: ValueSourceDocument,
    /// A sequence on the wire, but only the first element is meaningful in this format version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_mappings: Option<Vec<NodeDocument>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValueTypeDocument {
    Iri,
    Literal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    #[serde(alias = "bnode")]
    Blank,
}

/// The fields of each kind are optional on the wire so that the importer can report which one
/// is missing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ValueSourceDocument {
    Column {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },
    Constant {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        constant: Option<String>,
    },
    Expression {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expression: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },
    Value,
}

impl ValueSourceDocument {
    /// The `source` tag of this value source.
    pub fn kind(&self) -> &'static str {
        match self {
            ValueSourceDocument::Column { .. } => "column",
            ValueSourceDocument::Constant { .. } => "constant",
            ValueSourceDocument::Expression { .. } => "expression",
            ValueSourceDocument::Value => "value",
        }
    }
}
