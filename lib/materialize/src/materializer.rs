use crate::{BuiltinEvaluator, ExpressionEvaluator, MaterializeError, MaterializeResult, Row};
use oxiri::Iri;
use oxrdf::{BlankNode, Graph, Literal, NamedNode, Subject, Term, Triple};
use rdf_transform_model::{LiteralType, Node, Prefixes, Property, Transform, ValueSource, ValueType};
use tracing::{trace, warn};

/// Generates triples from rows with a [Transform].
///
/// Predicates, datatypes, language tags and expressions are checked once when the materializer
/// is created. Expressions are checked with [ExpressionEvaluator::check].
/// Problems in the data itself, for example a cell that is not a valid IRI, only skip the
/// affected subtree.
pub struct Materializer<'t, E = BuiltinEvaluator> {
    resolver: IriResolver<'t>,
    roots: Vec<CompiledNode<'t>>,
    evaluator: E,
}

impl<'t> Materializer<'t> {
    pub fn new(transform: &'t Transform) -> MaterializeResult<Self> {
        Self::with_evaluator(transform, BuiltinEvaluator)
    }
}

impl<'t, E: ExpressionEvaluator> Materializer<'t, E> {
    pub fn with_evaluator(transform: &'t Transform, evaluator: E) -> MaterializeResult<Self> {
        transform.validate()?;
        let resolver = IriResolver::new(transform)?;

        let mut roots = Vec::with_capacity(transform.subject_mappings.len());
        for (index, node) in transform.subject_mappings.iter().enumerate() {
            if node.value_type().is_literal() {
                warn!(index, "Skipping subject mapping with a literal value type");
                continue;
            }
            roots.push(compile_node(node, &resolver, &evaluator)?);
        }

        Ok(Self {
            resolver,
            roots,
            evaluator,
        })
    }

    /// Returns the triples produced for `row`, in mapping order.
    pub fn materialize_row(&self, row: &Row) -> MaterializeResult<Vec<Triple>> {
        let mut triples = Vec::new();
        let row_value = row.index.to_string();
        for root in &self.roots {
            self.emit(root, row, &row_value, &mut triples)?;
        }
        trace!(row = row.index, triples = triples.len(), "Materialized row");
        Ok(triples)
    }

    /// Collects the triples of the first `limit` rows into a graph. A `limit` of 0 means all rows.
    pub fn materialize_rows<'r>(
        &self,
        rows: impl IntoIterator<Item = &'r Row>,
        limit: usize,
    ) -> MaterializeResult<Graph> {
        let limit = if limit == 0 { usize::MAX } else { limit };
        let mut graph = Graph::new();
        for row in rows.into_iter().take(limit) {
            for triple in self.materialize_row(row)? {
                graph.insert(&triple);
            }
        }
        Ok(graph)
    }

    /// Produces the term of `node` and the triples of its subtree.
    ///
    /// `context` is the raw value of the enclosing subject, or the row index for a root.
    fn emit(
        &self,
        node: &CompiledNode<'_>,
        row: &Row,
        context: &str,
        triples: &mut Vec<Triple>,
    ) -> MaterializeResult<Option<Term>> {
        let Some(raw) = self.raw_value(node.source, row, context)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        let term: Term = match &node.term_type {
            CompiledType::Iri => match self.resolver.resolve(&raw) {
                Ok(iri) => iri.into(),
                Err(error) => {
                    warn!(row = row.index, %error, "Skipping value that is not a valid IRI");
                    return Ok(None);
                }
            },
            CompiledType::Blank => BlankNode::default().into(),
            CompiledType::PlainLiteral => Literal::new_simple_literal(raw.clone()).into(),
            CompiledType::TypedLiteral(datatype) => {
                Literal::new_typed_literal(raw.clone(), datatype.clone()).into()
            }
            CompiledType::LanguageLiteral(language) => {
                Literal::new_language_tagged_literal_unchecked(raw.clone(), language.clone()).into()
            }
        };

        if let Some(subject) = as_subject(&term) {
            for property in &node.properties {
                let Some(object) = &property.object else {
                    continue;
                };
                if let Some(object) = self.emit(object, row, &raw, triples)? {
                    triples.push(Triple::new(
                        subject.clone(),
                        property.predicate.clone(),
                        object,
                    ));
                }
            }
        }
        Ok(Some(term))
    }

    fn raw_value(
        &self,
        source: &ValueSource,
        row: &Row,
        context: &str,
    ) -> MaterializeResult<Option<String>> {
        Ok(match source {
            ValueSource::Column(column) => row.get(column).map(ToOwned::to_owned),
            ValueSource::Constant(constant) => Some(constant.clone()),
            ValueSource::Value => Some(context.to_owned()),
            ValueSource::Expression { expression, column } => {
                let input = match column {
                    Some(column) => row.get(column),
                    None => Some(context),
                };
                match input {
                    Some(input) => self.evaluator.evaluate(expression, input)?,
                    None => None,
                }
            }
        })
    }
}

fn as_subject(term: &Term) -> Option<Subject> {
    match term {
        Term::NamedNode(node) => Some(node.clone().into()),
        Term::BlankNode(node) => Some(node.clone().into()),
        _ => None,
    }
}

enum CompiledType {
    Iri,
    Blank,
    PlainLiteral,
    TypedLiteral(NamedNode),
    LanguageLiteral(String),
}

struct CompiledNode<'t> {
    source: &'t ValueSource,
    term_type: CompiledType,
    properties: Vec<CompiledProperty<'t>>,
}

struct CompiledProperty<'t> {
    predicate: NamedNode,
    object: Option<CompiledNode<'t>>,
}

fn compile_node<'t>(
    node: &'t Node,
    resolver: &IriResolver<'_>,
    evaluator: &impl ExpressionEvaluator,
) -> MaterializeResult<CompiledNode<'t>> {
    if let ValueSource::Expression { expression, .. } = node.value_source() {
        evaluator.check(expression)?;
    }
    let term_type = match node.value_type() {
        ValueType::Iri => CompiledType::Iri,
        ValueType::Blank => CompiledType::Blank,
        ValueType::Literal(LiteralType::Plain) => CompiledType::PlainLiteral,
        ValueType::Literal(LiteralType::Datatype(datatype)) => {
            CompiledType::TypedLiteral(resolver.resolve_datatype(datatype)?)
        }
        ValueType::Literal(LiteralType::Language(language)) => {
            Literal::new_language_tagged_literal("", language.as_str()).map_err(|error| {
                MaterializeError::InvalidLanguageTag {
                    tag: language.clone(),
                    message: error.to_string(),
                }
            })?;
            CompiledType::LanguageLiteral(language.clone())
        }
    };

    let mut properties = Vec::with_capacity(node.properties().len());
    for property in node.properties() {
        // Incomplete properties produce nothing, as on export.
        let Some(predicate) = resolver.predicate(property)? else {
            continue;
        };
        let object = property
            .object()
            .map(|object| compile_node(object, resolver, evaluator))
            .transpose()?;
        properties.push(CompiledProperty { predicate, object });
    }

    Ok(CompiledNode {
        source: node.value_source(),
        term_type,
        properties,
    })
}

/// Turns template names into IRIs: bound prefixed names are expanded, absolute IRIs are kept,
/// and anything else is resolved against the base IRI.
struct IriResolver<'t> {
    prefixes: &'t Prefixes,
    predefined: Prefixes,
    base: Option<Iri<String>>,
}

impl<'t> IriResolver<'t> {
    fn new(transform: &'t Transform) -> MaterializeResult<Self> {
        let base = if transform.base_iri.is_empty() {
            None
        } else {
            Some(
                Iri::parse(transform.base_iri.clone())
                    .map_err(|error| invalid_iri(&transform.base_iri, &error))?,
            )
        };
        Ok(Self {
            prefixes: &transform.prefixes,
            predefined: Prefixes::predefined(),
            base,
        })
    }

    fn resolve(&self, name: &str) -> MaterializeResult<NamedNode> {
        if let Some((prefix, local_part)) = name.split_once(':') {
            if let Some(namespace) = self.prefixes.get(prefix) {
                return named_node(format!("{namespace}{local_part}"));
            }
        }
        if Iri::parse(name).is_ok() {
            return named_node(name.to_owned());
        }
        match &self.base {
            Some(base) => base
                .resolve(name)
                .map(|iri| NamedNode::new_unchecked(iri.into_inner()))
                .map_err(|error| invalid_iri(name, &error)),
            None => Err(MaterializeError::InvalidIri {
                iri: name.to_owned(),
                message: "relative IRI without a base IRI".to_owned(),
            }),
        }
    }

    /// Like [IriResolver::resolve], but also knows the predefined vocabularies such as `xsd`.
    fn resolve_datatype(&self, name: &str) -> MaterializeResult<NamedNode> {
        if let Some((prefix, local_part)) = name.split_once(':') {
            if !self.prefixes.contains(prefix) {
                if let Some(namespace) = self.predefined.get(prefix) {
                    return named_node(format!("{namespace}{local_part}"));
                }
            }
        }
        self.resolve(name)
    }

    fn predicate(&self, property: &Property) -> MaterializeResult<Option<NamedNode>> {
        let Some(local_part) = property.local_part() else {
            return Ok(None);
        };
        let predicate = match property.prefix() {
            Some(prefix) => {
                let namespace = self
                    .prefixes
                    .get(prefix)
                    .ok_or_else(|| MaterializeError::UnknownPrefix(prefix.to_owned()))?;
                named_node(format!("{namespace}{local_part}"))?
            }
            None => self.resolve(local_part)?,
        };
        Ok(Some(predicate))
    }
}

fn named_node(iri: String) -> MaterializeResult<NamedNode> {
    match NamedNode::new(iri.as_str()) {
        Ok(node) => Ok(node),
        Err(error) => Err(invalid_iri(&iri, &error)),
    }
}

fn invalid_iri(iri: &str, error: &impl ToString) -> MaterializeError {
    MaterializeError::InvalidIri {
        iri: iri.to_owned(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> Transform {
        let mut transform = Transform::new("http://example.com/");
        transform.prefixes.add("ex", "http://example.com/ns#").unwrap();
        transform
    }

    #[test]
    fn resolves_prefixed_absolute_and_relative_names() -> MaterializeResult<()> {
        let transform = transform();
        let resolver = IriResolver::new(&transform)?;
        assert_eq!(resolver.resolve("ex:a")?.as_str(), "http://example.com/ns#a");
        assert_eq!(resolver.resolve("urn:isbn:123")?.as_str(), "urn:isbn:123");
        assert_eq!(resolver.resolve("people/1")?.as_str(), "http://example.com/people/1");
        assert_eq!(
            resolver.resolve_datatype("xsd:integer")?.as_str(),
            "http://www.w3.org/2001/XMLSchema#integer"
        );
        Ok(())
    }

    #[test]
    fn relative_name_without_base_fails() {
        let transform = Transform::default();
        let resolver = IriResolver::new(&transform).unwrap();
        assert!(matches!(
            resolver.resolve("people/1"),
            Err(MaterializeError::InvalidIri { .. })
        ));
    }

    #[test]
    fn unknown_predicate_prefix_fails() {
        let transform = transform();
        let resolver = IriResolver::new(&transform).unwrap();
        let property = Property::new(Some("foaf".to_owned()), "name");
        assert!(matches!(
            resolver.predicate(&property),
            Err(MaterializeError::UnknownPrefix(prefix)) if prefix == "foaf"
        ));
        assert!(resolver.predicate(&Property::incomplete()).unwrap().is_none());
    }
}
