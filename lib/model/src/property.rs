use crate::{Node, ValueSource};

/// One predicate edge from a subject [Node] to at most one object [Node].
///
/// A property without a local part is incomplete. The editor has not finished configuring it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Property {
    prefix: Option<String>,
    local_part: Option<String>,
    object: Option<Box<Node>>,
}

impl Property {
    /// Creates a property whose object is [Node::default_object].
    pub fn new(prefix: Option<String>, local_part: impl Into<String>) -> Self {
        Self {
            prefix,
            local_part: Some(local_part.into()),
            object: Some(Box::new(Node::default_object())),
        }
    }

    /// Creates a property that has no predicate yet.
    pub fn incomplete() -> Self {
        Self {
            prefix: None,
            local_part: None,
            object: Some(Box::new(Node::default_object())),
        }
    }

    #[must_use]
    pub fn with_object(mut self, object: Node) -> Self {
        self.object = Some(Box::new(object));
        self
    }

    /// Removes the object node.
    ///
    /// This is an editor-only state. The exported property has no `objectMappings`, and import
    /// restores [Node::default_object] in its place.
    #[must_use]
    pub fn without_object(mut self) -> Self {
        self.object = None;
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn local_part(&self) -> Option<&str> {
        self.local_part.as_deref()
    }

    /// Renames the predicate.
    pub fn set_name(&mut self, prefix: Option<String>, local_part: Option<String>) {
        self.prefix = prefix;
        self.local_part = local_part;
    }

    pub fn is_complete(&self) -> bool {
        self.local_part.is_some()
    }

    pub fn object(&self) -> Option<&Node> {
        self.object.as_deref()
    }

    pub fn object_mut(&mut self) -> Option<&mut Node> {
        self.object.as_deref_mut()
    }

    /// Replaces the object node. `None` has the same effect as [Property::without_object].
    pub fn set_object(&mut self, object: Option<Node>) {
        self.object = object.map(Box::new);
    }

    /// The source of the predicate. Predicates are always constants in this format version.
    pub fn value_source(&self) -> Option<ValueSource> {
        self.local_part
            .as_ref()
            .map(|local_part| ValueSource::Constant(local_part.clone()))
    }

    /// The label shown for this property: `prefix:localPart`, the bare local part, or
    /// `Property?` while the property is incomplete.
    pub fn display_name(&self) -> String {
        match (&self.prefix, &self.local_part) {
            (Some(prefix), Some(local_part)) => format!("{prefix}:{local_part}"),
            (None, Some(local_part)) => local_part.clone(),
            (_, None) => "Property?".to_owned(),
        }
    }
}
