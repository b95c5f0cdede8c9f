#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use rdf_transform_codec::{
    import_into, import_property, parse, serialize, serialize_pretty, CodecError, CodecResult,
    PropertyDocument,
};
use rdf_transform_model::{
    LiteralType, ModelError, Node, Prefixes, Property, Transform, ValueSource, ValueType,
};

fn column(name: &str) -> ValueSource {
    ValueSource::Column(name.to_owned())
}

fn person_transform() -> Transform {
    let mut prefixes = Prefixes::new();
    prefixes
        .add("foaf", "http://xmlns.com/foaf/0.1/")
        .unwrap();
    prefixes.add("xsd", "http://www.w3.org/2001/XMLSchema#").unwrap();

    let address = Node::new(ValueType::Blank, ValueSource::Value).with_properties(vec![
        Property::new(Some("foaf".to_owned()), "city").with_object(Node::new(
            ValueType::Literal(LiteralType::Language("en".to_owned())),
            column("City"),
        )),
    ]);

    let person = Node::new(ValueType::Iri, column("ID")).with_properties(vec![
        Property::new(Some("foaf".to_owned()), "name")
            .with_object(Node::new(ValueType::literal(), column("FullName"))),
        Property::new(Some("foaf".to_owned()), "age").with_object(Node::new(
            ValueType::Literal(LiteralType::Datatype("xsd:integer".to_owned())),
            ValueSource::Expression {
                expression: "value.trim()".to_owned(),
                column: Some("Age".to_owned()),
            },
        )),
        Property::new(None, "http://example.com/address").with_object(address),
        Property::new(Some("foaf".to_owned()), "nick"),
        Property::new(Some("foaf".to_owned()), "nick"),
    ]);

    let mut transform = Transform::new("http://example.com/").with_prefixes(prefixes);
    transform.add_subject(person);
    transform.add_subject(Node::new(
        ValueType::Iri,
        ValueSource::Constant("http://example.com/dataset".to_owned()),
    ));
    transform
}

#[test]
fn round_trip_preserves_tree() -> CodecResult<()> {
    let transform = person_transform();
    let imported = parse(&serialize(&transform)?)?;
    assert_eq!(imported, transform);

    let names: Vec<_> = imported.subject_mappings[0]
        .properties()
        .iter()
        .map(Property::display_name)
        .collect();
    assert_eq!(
        names,
        [
            "foaf:name",
            "foaf:age",
            "http://example.com/address",
            "foaf:nick",
            "foaf:nick"
        ]
    );
    Ok(())
}

#[test]
fn pretty_output_round_trips() -> CodecResult<()> {
    let transform = person_transform();
    assert_eq!(parse(&serialize_pretty(&transform)?)?, transform);
    Ok(())
}

#[test]
fn incomplete_property_is_skipped_on_export() -> CodecResult<()> {
    let mut prefixes = Prefixes::new();
    prefixes.add("foaf", "http://xmlns.com/foaf/0.1/").unwrap();
    let mut transform = Transform::new("http://example.com/").with_prefixes(prefixes);
    transform.add_subject(Node::new(ValueType::Iri, column("ID")).with_properties(vec![
        Property::new(Some("foaf".to_owned()), "name")
            .with_object(Node::new(ValueType::literal(), column("FullName"))),
        Property::incomplete(),
    ]));

    insta::assert_snapshot!(serialize_pretty(&transform)?, @r#"
    {
      "baseIRI": "http://example.com/",
      "prefixes": [
        {
          "prefix": "foaf",
          "iri": "http://xmlns.com/foaf/0.1/"
        }
      ],
      "subjectMappings": [
        {
          "valueType": {
            "type": "iri"
          },
          "valueSource": {
            "source": "column",
            "column": "ID"
          },
          "propertyMappings": [
            {
              "prefix": "foaf",
              "valueSource": {
                "source": "constant",
                "constant": "name"
              },
              "objectMappings": [
                {
                  "valueType": {
                    "type": "literal"
                  },
                  "valueSource": {
                    "source": "column",
                    "column": "FullName"
                  }
                }
              ]
            }
          ]
        }
      ]
    }
    "#);
    Ok(())
}

#[test]
fn only_incomplete_properties_omit_property_mappings() -> CodecResult<()> {
    let mut transform = Transform::new("http://example.com/");
    transform.add_subject(
        Node::new(ValueType::Iri, column("ID")).with_properties(vec![Property::incomplete()]),
    );
    let text = serialize(&transform)?;
    assert!(!text.contains("propertyMappings"), "{text}");
    Ok(())
}

#[test]
fn empty_property_list_is_omitted_and_restored() -> CodecResult<()> {
    let mut transform = Transform::new("http://example.com/");
    transform.add_subject(Node::new(ValueType::Blank, ValueSource::Value));
    let text = serialize(&transform)?;
    assert_eq!(
        text,
        r#"{"baseIRI":"http://example.com/","prefixes":[],"subjectMappings":[{"valueType":{"type":"blank"},"valueSource":{"source":"value"}}]}"#
    );

    let imported = parse(&text)?;
    assert!(!imported.subject_mappings[0].has_properties());
    assert!(!imported.subject_mappings[0].is_expanded());
    Ok(())
}

#[test]
fn foaf_name_example() -> CodecResult<()> {
    let document: PropertyDocument = serde_json::from_str(
        r#"{"prefix":"foaf","valueSource":{"source":"constant","constant":"name"},"objectMappings":[{"valueType":{"type":"literal"},"valueSource":{"source":"column","column":"FullName"}}]}"#,
    )
    .unwrap();
    let property = import_property(&document)?;
    assert_eq!(property.prefix(), Some("foaf"));
    assert_eq!(property.local_part(), Some("name"));
    let object = property.object().unwrap();
    assert_eq!(object.value_type(), &ValueType::literal());
    assert_eq!(object.value_source(), &column("FullName"));
    Ok(())
}

#[test]
fn missing_object_mappings_imports_default_object() -> CodecResult<()> {
    for object_mappings in ["", r#","objectMappings":[]"#, r#","objectMappings":null"#] {
        let document: PropertyDocument = serde_json::from_str(&format!(
            r#"{{"valueSource":{{"source":"constant","constant":"name"}}{object_mappings}}}"#
        ))
        .unwrap();
        let property = import_property(&document)?;
        let object = property.object().unwrap();
        assert!(!object.has_properties());
        assert!(object.value_type().is_literal());
        assert!(object.is_default_object());
    }
    Ok(())
}

#[test]
fn only_first_object_mapping_is_imported() -> CodecResult<()> {
    let document: PropertyDocument = serde_json::from_str(
        r#"{
            "valueSource": {"source": "constant", "constant": "knows"},
            "objectMappings": [
                {"valueType": {"type": "iri"}, "valueSource": {"source": "column", "column": "Friend"}},
                {"valueType": {"type": "iri"}, "valueSource": {"source": "column", "column": "Enemy"}},
                {"valueType": {"type": "literal"}, "valueSource": {"source": "value"}}
            ]
        }"#,
    )
    .unwrap();
    let property = import_property(&document)?;
    assert_eq!(property.object().unwrap().value_source(), &column("Friend"));
    Ok(())
}

#[test]
fn literal_with_properties_is_rejected() {
    let text = r#"{
        "baseIRI": "http://example.com/",
        "subjectMappings": [{
            "valueType": {"type": "iri"},
            "valueSource": {"source": "column", "column": "ID"},
            "propertyMappings": [{
                "valueSource": {"source": "constant", "constant": "name"},
                "objectMappings": [{
                    "valueType": {"type": "literal"},
                    "valueSource": {"source": "column", "column": "Name"},
                    "propertyMappings": [
                        {"valueSource": {"source": "constant", "constant": "nested"}}
                    ]
                }]
            }]
        }]
    }"#;
    match parse(text) {
        Err(CodecError::Model(ModelError::StructuralViolation { path })) => assert_eq!(
            path,
            "subjectMappings[0].propertyMappings[0].objectMappings[0]"
        ),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn schema_violations_are_parse_errors() {
    let unknown_type = r#"{"baseIRI":"","subjectMappings":[{"valueType":{"type":"uri"},"valueSource":{"source":"value"}}]}"#;
    assert!(matches!(parse(unknown_type), Err(CodecError::Parse(_))));

    let unknown_source = r#"{"baseIRI":"","subjectMappings":[{"valueType":{"type":"iri"},"valueSource":{"source":"row"}}]}"#;
    assert!(matches!(parse(unknown_source), Err(CodecError::Parse(_))));

    assert!(matches!(parse("{"), Err(CodecError::Parse(_))));
}

#[test]
fn predicate_sources_are_checked() {
    let missing = r#"{"baseIRI":"","subjectMappings":[{"valueType":{"type":"iri"},"valueSource":{"source":"value"},"propertyMappings":[{"valueSource":{"source":"constant"}}]}]}"#;
    assert!(matches!(
        parse(missing),
        Err(CodecError::MissingLocalPart { .. })
    ));

    let column = r#"{"baseIRI":"","subjectMappings":[{"valueType":{"type":"iri"},"valueSource":{"source":"value"},"propertyMappings":[{"valueSource":{"source":"column","column":"Predicate"}}]}]}"#;
    match parse(column) {
        Err(CodecError::UnsupportedPredicateSource { path, kind }) => {
            assert_eq!(path, "subjectMappings[0].propertyMappings[0]");
            assert_eq!(kind, "column");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn duplicate_prefixes_are_rejected() {
    let text = r#"{"baseIRI":"","prefixes":[{"prefix":"ex","iri":"http://a.example/"},{"prefix":"ex","iri":"http://b.example/"}]}"#;
    assert!(matches!(parse(text), Err(CodecError::DuplicatePrefix(prefix)) if prefix == "ex"));
}

#[test]
fn bnode_alias_is_accepted() -> CodecResult<()> {
    let text = r#"{"baseIRI":"","subjectMappings":[{"valueType":{"type":"bnode"},"valueSource":{"source":"value"}}]}"#;
    assert!(parse(text)?.subject_mappings[0].value_type().is_blank());
    Ok(())
}

#[test]
fn failed_import_leaves_target_untouched() {
    let mut transform = person_transform();
    let before = transform.clone();
    let result = import_into(&mut transform, r#"{"baseIRI":"x","prefixes":[{"prefix":"a"}]}"#);
    assert!(result.is_err());
    assert_eq!(transform, before);
}

#[test]
fn import_into_replaces_target() -> CodecResult<()> {
    let mut transform = person_transform();
    import_into(&mut transform, r#"{"baseIRI":"http://other.example/"}"#)?;
    assert_eq!(transform, Transform::new("http://other.example/"));
    Ok(())
}

#[test]
fn export_is_deterministic() -> CodecResult<()> {
    let transform = person_transform();
    assert_eq!(serialize(&transform)?, serialize(&transform)?);
    Ok(())
}

#[test]
fn literal_subject_with_properties_fails_to_serialize() {
    let mut transform = Transform::new("http://example.com/");
    transform.add_subject(Node::new(ValueType::Iri, column("ID")));
    transform.add_subject(
        Node::new(ValueType::literal(), column("Name"))
            .with_properties(vec![Property::new(None, "p")]),
    );

    for result in [serialize(&transform), serialize_pretty(&transform)] {
        match result {
            Err(CodecError::Model(ModelError::StructuralViolation { path })) => {
                assert_eq!(path, "subjectMappings[1]");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

#[test]
fn property_without_object_imports_with_default_object() -> CodecResult<()> {
    let mut transform = Transform::new("http://example.com/");
    transform.add_subject(
        Node::new(ValueType::Iri, column("ID"))
            .with_properties(vec![Property::new(None, "http://example.com/p").without_object()]),
    );

    // A property without an object exports without objectMappings, which imports as the
    // default object. This is the one tree shape that does not round trip.
    let imported = parse(&serialize(&transform)?)?;
    assert_ne!(imported, transform);
    let property = &imported.subject_mappings[0].properties()[0];
    assert!(property.object().is_some_and(Node::is_default_object));
    Ok(())
}
