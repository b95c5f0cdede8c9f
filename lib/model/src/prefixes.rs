use crate::{ModelError, ModelResult};
use oxiri::Iri;

const PREDEFINED: [(&str, &str); 7] = [
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("dcterms", "http://purl.org/dc/terms/"),
];

/// A namespace binding.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Prefix {
    pub prefix: String,
    pub iri: String,
}

/// An ordered table of prefix bindings with unique prefixes.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Prefixes {
    entries: Vec<Prefix>,
}

impl Prefixes {
    pub fn new() -> Self {
        Self::default()
    }

    /// The vocabularies offered to a new transform.
    pub fn predefined() -> Self {
        Self {
            entries: PREDEFINED
                .iter()
                .map(|(prefix, iri)| Prefix {
                    prefix: (*prefix).to_owned(),
                    iri: (*iri).to_owned(),
                })
                .collect(),
        }
    }

    /// Binds `prefix` to `namespace`.
    ///
    /// Fails if the prefix is already bound or if the namespace is not an absolute IRI.
    pub fn add(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> ModelResult<()> {
        let prefix = prefix.into();
        let namespace = namespace.into();
        if self.contains(&prefix) {
            return Err(ModelError::DuplicatePrefix(prefix));
        }
        let parsed = Iri::parse(namespace.as_str())
            .map(|_| ())
            .map_err(|error| error.to_string());
        if let Err(message) = parsed {
            return Err(ModelError::InvalidNamespace {
                prefix,
                namespace,
                message,
            });
        }
        self.entries.push(Prefix {
            prefix,
            iri: namespace,
        });
        Ok(())
    }

    pub fn remove(&mut self, prefix: &str) -> Option<Prefix> {
        let position = self.entries.iter().position(|entry| entry.prefix == prefix)?;
        Some(self.entries.remove(position))
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.get(prefix).is_some()
    }

    /// Returns the namespace bound to `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.prefix == prefix)
            .map(|entry| entry.iri.as_str())
    }

    /// Expands a prefixed name like `foaf:name`.
    ///
    /// Returns `Ok(None)` if `name` has no colon.
    pub fn expand(&self, name: &str) -> ModelResult<Option<String>> {
        let Some((prefix, local_part)) = name.split_once(':') else {
            return Ok(None);
        };
        let namespace = self
            .get(prefix)
            .ok_or_else(|| ModelError::UnknownPrefix(prefix.to_owned()))?;
        Ok(Some(format!("{namespace}{local_part}")))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prefix> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Prefixes {
    type Item = &'a Prefix;
    type IntoIter = std::slice::Iter<'a, Prefix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
