//! Tests for object property synthesis.

use ontograph::{
    vocab, InternalEdge, MemoryModel, NamingMode, NodeNamer, ObjectPropertySynthesizer,
    PrefixMap, PropertySide,
};

const KNOWS: &str = "http://example.org/onto#knows";
const PERSON: &str = "http://example.org/onto#Person";
const AGENT: &str = "http://example.org/onto#Agent";

fn namer() -> NodeNamer {
    NodeNamer::new(NamingMode::LocalName, PrefixMap::new())
}

#[test]
fn test_domain_and_range_become_one_edge() {
    let mut synth = ObjectPropertySynthesizer::new();
    synth.accumulate(KNOWS, PropertySide::Domain, PERSON);
    synth.accumulate(KNOWS, PropertySide::Range, AGENT);

    let edges = synth.finalize(&MemoryModel::new(), &namer());
    assert_eq!(edges, vec![InternalEdge::new("Person", "Agent", "knows")]);
}

#[test]
fn test_range_only_defaults_domain_to_thing() {
    let mut synth = ObjectPropertySynthesizer::new();
    synth.accumulate(KNOWS, PropertySide::Range, PERSON);

    let pending = synth.get(KNOWS).unwrap();
    assert_eq!(pending.domain, vocab::OWL_THING);

    let edges = synth.finalize(&MemoryModel::new(), &namer());
    assert_eq!(edges, vec![InternalEdge::new("Thing", "Person", "knows")]);
}

#[test]
fn test_properties_keep_first_seen_order() {
    let likes = "http://example.org/onto#likes";
    let mut synth = ObjectPropertySynthesizer::new();
    synth.accumulate(likes, PropertySide::Domain, PERSON);
    synth.accumulate(KNOWS, PropertySide::Domain, PERSON);
    synth.accumulate(likes, PropertySide::Range, AGENT);

    let labels: Vec<String> = synth
        .finalize(&MemoryModel::new(), &namer())
        .into_iter()
        .map(|e| e.label)
        .collect();
    assert_eq!(labels, vec!["likes", "knows"]);
}

#[test]
fn test_empty_synthesizer_yields_nothing() {
    let synth = ObjectPropertySynthesizer::new();
    assert!(synth.is_empty());
    assert!(synth.finalize(&MemoryModel::new(), &namer()).is_empty());
}
