//! Shared fixtures for pipeline tests.

use ontograph::{vocab, ConversionConfig, MemoryModel, NamingMode, StyleConfig};
use std::collections::HashMap;

pub const EX: &str = "http://example.org/onto#";

pub fn ex(local: &str) -> String {
    format!("{EX}{local}")
}

pub fn style() -> StyleConfig {
    let keys: HashMap<String, String> = [
        ("classColor", "orange"),
        ("individualColor", "yellow"),
        ("literalColor", "green"),
        ("arrowColor", "blue"),
        ("classShape", "ellipse"),
        ("individualShape", "rectangle"),
        ("literalShape", "roundrectangle"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    StyleConfig::from_keys(&keys).unwrap()
}

pub fn config(mode: NamingMode, synthesize: bool) -> ConversionConfig {
    ConversionConfig::new(style())
        .with_naming_mode(mode)
        .with_synthesis(synthesize)
}

/// One class `Person` and one object property `knows` from Person to Person.
pub fn person_knows_model() -> MemoryModel {
    let mut model = MemoryModel::new();
    model.add(&ex("knows"), vocab::RDFS_DOMAIN, &ex("Person"));
    model.add(&ex("knows"), vocab::RDFS_RANGE, &ex("Person"));
    model
}

/// A small ontology with classes, individuals, literals and a restriction.
pub fn family_model() -> MemoryModel {
    let mut model = MemoryModel::new();
    model.add_type(&ex("Person"), vocab::OWL_CLASS);
    model.add_type(&ex("Pet"), vocab::OWL_CLASS);
    model.add_type(&ex("owns"), vocab::OWL_OBJECT_PROPERTY);
    model.add_type(&ex("name"), vocab::OWL_DATATYPE_PROPERTY);
    model.add(&ex("owns"), vocab::RDFS_DOMAIN, &ex("Person"));
    model.add(&ex("owns"), vocab::RDFS_RANGE, &ex("Pet"));
    model.add_type(&ex("alice"), &ex("Person"));
    model.add_type(&ex("rex"), &ex("Pet"));
    model.add(&ex("alice"), &ex("owns"), &ex("rex"));
    model.add_literal(&ex("alice"), &ex("name"), "Alice");
    model.add_type("_:r0", vocab::OWL_RESTRICTION);
    model.add("_:r0", "http://www.w3.org/2002/07/owl#onProperty", &ex("owns"));
    model.add(&ex("Person"), "http://www.w3.org/2000/01/rdf-schema#subClassOf", "_:r0");
    model
}

/// Number of `<node id=` elements in a document.
pub fn node_count(xml: &str) -> usize {
    xml.matches("<node id=").count()
}

/// Number of `<edge id=` elements in a document.
pub fn edge_count(xml: &str) -> usize {
    xml.matches("<edge id=").count()
}

/// Value of a `parse.*` attribute in the graph header.
pub fn header_count(xml: &str, attr: &str) -> usize {
    let needle = format!("{attr}=\"");
    let start = xml.find(&needle).unwrap() + needle.len();
    let end = start + xml[start..].find('"').unwrap();
    xml[start..end].parse().unwrap()
}
