use crate::{ModelResult, Node, Prefixes};

/// The root of a mapping: a base IRI, prefix bindings and one subject node per top-level RDF
/// subject produced for each source row.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Transform {
    pub base_iri: String,
    pub prefixes: Prefixes,
    pub subject_mappings: Vec<Node>,
}

impl Transform {
    pub fn new(base_iri: impl Into<String>) -> Self {
        Self {
            base_iri: base_iri.into(),
            prefixes: Prefixes::new(),
            subject_mappings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_prefixes(mut self, prefixes: Prefixes) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn add_subject(&mut self, node: Node) {
        self.subject_mappings.push(node);
    }

    /// Checks every subject tree. See [Node::validate].
    pub fn validate(&self) -> ModelResult<()> {
        for (index, node) in self.subject_mappings.iter().enumerate() {
            node.validate_at(&format!("subjectMappings[{index}]"))?;
        }
        Ok(())
    }
}
