//! In-memory ontology model.
//!
//! Statements are kept in insertion order, which is also the enumeration
//! order seen by the extractor. Individuals and properties are derived from
//! `rdf:type` statements on demand.

use super::{GraphNode, Literal, OntologyModel, Resource, Statement};
use crate::vocab;
use indexmap::IndexSet;

/// Ontology model backed by an ordered statement list.
#[derive(Debug, Clone, Default)]
pub struct MemoryModel {
    statements: Vec<Statement>,
}

impl MemoryModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Builder pattern: add a statement with a resource object and return self.
    pub fn with(mut self, subject: &str, predicate: &str, object: &str) -> Self {
        self.add(subject, predicate, object);
        self
    }

    /// Add a statement whose object is a resource.
    pub fn add(&mut self, subject: &str, predicate: &str, object: &str) {
        self.statements.push(Statement::new(
            Resource::new(subject),
            Resource::new(predicate),
            Resource::new(object),
        ));
    }

    /// Add a statement whose object is a literal.
    pub fn add_literal(&mut self, subject: &str, predicate: &str, value: &str) {
        self.statements.push(Statement::new(
            Resource::new(subject),
            Resource::new(predicate),
            Literal::new(value),
        ));
    }

    /// Add an `rdf:type` statement.
    pub fn add_type(&mut self, subject: &str, type_uri: &str) {
        self.add(subject, vocab::RDF_TYPE, type_uri);
    }

    /// Append a statement as-is, including malformed ones.
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Number of statements held.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the model holds no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// URIs of every subject typed `owl:Class` or `rdfs:Class`.
    ///
    /// Blank-node classes (anonymous class expressions) are left out.
    pub fn class_uris(&self) -> Vec<String> {
        self.subjects_typed(|t| vocab::CLASS_TYPES.contains(&t))
            .into_iter()
            .filter(|r| !r.is_blank())
            .map(|r| r.uri().to_string())
            .collect()
    }

    /// URIs of every subject typed `owl:Restriction`.
    pub fn restriction_nodes(&self) -> Vec<String> {
        self.subjects_typed(|t| t == vocab::OWL_RESTRICTION)
            .into_iter()
            .map(|r| r.uri().to_string())
            .collect()
    }

    fn typings(&self) -> impl Iterator<Item = (&Resource, &Resource)> {
        self.statements.iter().filter_map(|st| {
            let subject = st.subject.as_ref()?;
            let predicate = st.predicate.as_ref()?;
            if predicate.uri() != vocab::RDF_TYPE {
                return None;
            }
            match &st.object {
                GraphNode::Resource(type_res) => Some((subject, type_res)),
                GraphNode::Literal(_) => None,
            }
        })
    }

    fn subjects_typed(&self, matches: impl Fn(&str) -> bool) -> Vec<Resource> {
        let found: IndexSet<&Resource> = self
            .typings()
            .filter(|(_, t)| matches(t.uri()))
            .map(|(s, _)| s)
            .collect();
        found.into_iter().cloned().collect()
    }
}

impl OntologyModel for MemoryModel {
    fn statements(&self) -> Vec<Statement> {
        self.statements.clone()
    }

    fn individuals(&self) -> Vec<Resource> {
        let classes: IndexSet<&str> = self
            .typings()
            .filter(|(_, t)| vocab::CLASS_TYPES.contains(&t.uri()))
            .map(|(s, _)| s.uri())
            .collect();

        let found: IndexSet<&Resource> = self
            .typings()
            .filter(|(_, t)| {
                t.uri() == vocab::OWL_NAMED_INDIVIDUAL || classes.contains(t.uri())
            })
            .map(|(s, _)| s)
            .collect();
        found.into_iter().cloned().collect()
    }

    fn object_properties(&self) -> Vec<Resource> {
        self.subjects_typed(|t| t == vocab::OWL_OBJECT_PROPERTY)
    }

    fn datatype_properties(&self) -> Vec<Resource> {
        self.subjects_typed(|t| t == vocab::OWL_DATATYPE_PROPERTY)
    }
}
