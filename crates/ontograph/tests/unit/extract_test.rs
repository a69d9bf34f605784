//! Tests for statement walking and filtering.

use ontograph::{
    vocab, ConvertError, ExcludedNodes, InternalEdge, Literal, NamingMode, NodeNamer, PrefixMap,
    Resource, Statement, TripleExtractor, TripleMember,
};

const EX: &str = "http://example.org/onto#";

fn res(local: &str) -> Resource {
    Resource::new(format!("{EX}{local}"))
}

fn namer() -> NodeNamer {
    NodeNamer::new(NamingMode::LocalName, PrefixMap::new())
}

#[test]
fn test_edges_in_statement_order() {
    let statements = vec![
        Statement::new(res("alice"), res("knows"), res("bob")),
        Statement::new(res("bob"), res("knows"), res("carol")),
    ];
    let namer = namer();
    let excluded = ExcludedNodes::new();
    let extraction = TripleExtractor::new(&namer, &excluded, false)
        .extract(&statements)
        .unwrap();

    assert_eq!(
        extraction.edges,
        vec![
            InternalEdge::new("alice", "bob", "knows"),
            InternalEdge::new("bob", "carol", "knows"),
        ]
    );
    assert!(extraction.synthesizer.is_none());
}

#[test]
fn test_literal_objects_are_recorded() {
    let statements = vec![
        Statement::new(res("alice"), res("name"), Literal::new("Alice")),
        Statement::new(res("bob"), res("name"), Literal::new("Alice")),
    ];
    let namer = namer();
    let excluded = ExcludedNodes::new();
    let extraction = TripleExtractor::new(&namer, &excluded, false)
        .extract(&statements)
        .unwrap();

    assert_eq!(extraction.edges.len(), 2);
    assert_eq!(extraction.edges[0].target, "Alice");
    assert_eq!(extraction.literals.len(), 1);
}

#[test]
fn test_excluded_subject_and_object_are_skipped() {
    let restriction = Resource::blank("r0");
    let statements = vec![
        Statement::new(restriction.clone(), res("onProperty"), res("knows")),
        Statement::new(res("Person"), res("subClassOf"), restriction),
        Statement::new(res("Person"), res("subClassOf"), res("Agent")),
    ];
    let namer = namer();
    let excluded: ExcludedNodes = ["_:r0"].into_iter().collect();
    let extraction = TripleExtractor::new(&namer, &excluded, false)
        .extract(&statements)
        .unwrap();

    assert_eq!(
        extraction.edges,
        vec![InternalEdge::new("Person", "Agent", "subClassOf")]
    );
}

#[test]
fn test_domain_and_range_diverted_when_synthesizing() {
    let statements = vec![
        Statement::new(res("knows"), Resource::new(vocab::RDFS_DOMAIN), res("Person")),
        Statement::new(res("knows"), Resource::new(vocab::RDFS_RANGE), res("Person")),
        Statement::new(res("alice"), res("knows"), res("bob")),
    ];
    let namer = namer();
    let excluded = ExcludedNodes::new();
    let extraction = TripleExtractor::new(&namer, &excluded, true)
        .extract(&statements)
        .unwrap();

    assert_eq!(extraction.edges, vec![InternalEdge::new("alice", "bob", "knows")]);
    let synth = extraction.synthesizer.unwrap();
    assert_eq!(synth.len(), 1);
}

#[test]
fn test_null_predicate_reports_position() {
    let statements = vec![
        Statement::new(res("alice"), res("knows"), res("bob")),
        Statement {
            subject: Some(res("bob")),
            predicate: None,
            object: res("carol").into(),
        },
    ];
    let namer = namer();
    let excluded = ExcludedNodes::new();
    let err = TripleExtractor::new(&namer, &excluded, false)
        .extract(&statements)
        .unwrap_err();

    assert!(matches!(
        err,
        ConvertError::NullTripleMember {
            position: 1,
            member: TripleMember::Predicate
        }
    ));
}
