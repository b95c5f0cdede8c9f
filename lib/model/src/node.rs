use crate::{ModelError, ModelResult, Property};

/// The kind of RDF term a [Node] produces.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum ValueType {
    Iri,
    Literal(LiteralType),
    Blank,
}

impl ValueType {
    /// A plain literal without datatype or language tag.
    pub fn literal() -> Self {
        ValueType::Literal(LiteralType::Plain)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ValueType::Literal(_))
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, ValueType::Iri)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, ValueType::Blank)
    }
}

/// The annotation carried by a literal [ValueType].
///
/// A literal has either a datatype or a language tag, never both.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default)]
pub enum LiteralType {
    #[default]
    Plain,
    /// The datatype IRI. It may be a prefixed name such as `xsd:integer`.
    Datatype(String),
    Language(String),
}

impl LiteralType {
    pub fn datatype(&self) -> Option<&str> {
        match self {
            LiteralType::Datatype(datatype) => Some(datatype),
            _ => None,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            LiteralType::Language(language) => Some(language),
            _ => None,
        }
    }
}

/// Where the raw value of a [Node] comes from.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum ValueSource {
    /// The cell of the named column.
    Column(String),
    /// A fixed string.
    Constant(String),
    /// An expression evaluated against a column, or against the enclosing value if no column is
    /// given.
    Expression {
        expression: String,
        column: Option<String>,
    },
    /// Use the source-data value directly.
    Value,
}

impl ValueSource {
    pub fn column(&self) -> Option<&str> {
        match self {
            ValueSource::Column(column) => Some(column),
            ValueSource::Expression { column, .. } => column.as_deref(),
            ValueSource::Constant(_) | ValueSource::Value => None,
        }
    }

    pub fn constant(&self) -> Option<&str> {
        match self {
            ValueSource::Constant(constant) => Some(constant),
            _ => None,
        }
    }
}

/// One mapping target in a transform tree.
///
/// A node owns its outgoing [Property] edges. Each property owns at most one object node, so a
/// tree never shares or cycles.
///
/// The `expanded` flag is an editor display hint. It does not take part in equality.
#[derive(Clone, Debug)]
pub struct Node {
    value_type: ValueType,
    value_source: ValueSource,
    properties: Vec<Property>,
    expanded: bool,
}

impl Node {
    pub fn new(value_type: ValueType, value_source: ValueSource) -> Self {
        Self {
            value_type,
            value_source,
            properties: Vec::new(),
            expanded: false,
        }
    }

    /// The object node used when a property is created without an explicit object: a plain
    /// literal taken from the source value, without properties.
    pub fn default_object() -> Self {
        Self::new(ValueType::literal(), ValueSource::Value)
    }

    /// Checks structurally whether this node is the same as [Node::default_object].
    pub fn is_default_object(&self) -> bool {
        self.value_type == ValueType::literal()
            && self.value_source == ValueSource::Value
            && self.properties.is_empty()
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.set_properties(properties);
        self
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn set_value_type(&mut self, value_type: ValueType) {
        self.value_type = value_type;
    }

    pub fn value_source(&self) -> &ValueSource {
        &self.value_source
    }

    pub fn set_value_source(&mut self, value_source: ValueSource) {
        self.value_source = value_source;
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Vec<Property> {
        &mut self.properties
    }

    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Replaces the property list. Repeated predicates are allowed.
    pub fn set_properties(&mut self, properties: Vec<Property>) {
        self.properties = properties;
    }

    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Removes the property at `index`, keeping the order of the others.
    pub fn remove_property(&mut self, index: usize) -> Option<Property> {
        (index < self.properties.len()).then(|| self.properties.remove(index))
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Checks that no literal node in this subtree declares properties.
    pub fn validate(&self) -> ModelResult<()> {
        self.validate_at("node")
    }

    pub(crate) fn validate_at(&self, path: &str) -> ModelResult<()> {
        if self.value_type.is_literal() && self.has_properties() {
            return Err(ModelError::StructuralViolation {
                path: path.to_owned(),
            });
        }
        for (index, property) in self.properties.iter().enumerate() {
            if let Some(object) = property.object() {
                object.validate_at(&format!("{path}.propertyMappings[{index}].objectMappings[0]"))?;
            }
        }
        Ok(())
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.value_type == other.value_type
            && self.value_source == other.value_source
            && self.properties == other.properties
    }
}

impl Eq for Node {}
