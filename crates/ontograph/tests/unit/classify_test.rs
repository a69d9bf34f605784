//! Tests for node classification.

use ontograph::{vocab, MemoryModel, NamingMode, NodeClassifier, NodeNamer, NodeRole, PrefixMap};

const EX: &str = "http://example.org/onto#";

fn ex(local: &str) -> String {
    format!("{EX}{local}")
}

fn model() -> MemoryModel {
    let mut model = MemoryModel::new();
    model.add_type(&ex("Person"), vocab::OWL_CLASS);
    model.add_type(&ex("knows"), vocab::OWL_OBJECT_PROPERTY);
    model.add_type(&ex("age"), vocab::OWL_DATATYPE_PROPERTY);
    model.add_type(&ex("alice"), &ex("Person"));
    model.add_type(&ex("bob"), vocab::OWL_NAMED_INDIVIDUAL);
    model
}

#[test]
fn test_sets_are_populated_by_name() {
    let model = model();
    let namer = NodeNamer::new(NamingMode::LocalName, PrefixMap::new());
    let sets = NodeClassifier::new(&namer).classify(&model, &model.class_uris());

    assert!(sets.classes.contains("Person"));
    assert!(sets.individuals.contains("alice"));
    assert!(sets.individuals.contains("bob"));
    assert!(sets.object_properties.contains("knows"));
    assert!(sets.data_properties.contains("age"));
    assert!(sets.literals.is_empty());
}

#[test]
fn test_sets_follow_naming_mode() {
    let model = model();
    let namer = NodeNamer::new(NamingMode::Uri, PrefixMap::new());
    let sets = NodeClassifier::new(&namer).classify(&model, &model.class_uris());

    assert!(sets.classes.contains(ex("Person").as_str()));
    assert!(!sets.classes.contains("Person"));
}

#[test]
fn test_class_wins_over_individual() {
    let mut model = model();
    // punning: Person is used as both class and individual
    model.add_type(&ex("Person"), vocab::OWL_NAMED_INDIVIDUAL);

    let namer = NodeNamer::new(NamingMode::LocalName, PrefixMap::new());
    let sets = NodeClassifier::new(&namer)
        .classify(&model, &model.class_uris())
        .with_literals(["Person".to_string()]);

    assert_eq!(sets.role_of("Person"), Some(NodeRole::Class));
}

#[test]
fn test_empty_model() {
    let namer = NodeNamer::new(NamingMode::LocalName, PrefixMap::new());
    let sets = NodeClassifier::new(&namer).classify(&MemoryModel::new(), &[]);

    assert!(sets.classes.is_empty());
    assert_eq!(sets.role_of("anything"), None);
    assert!(!sets.is_property("anything"));
}
