//! Statement walk that turns a model into name-resolved edges.

use crate::error::{ConvertError, Result, TripleMember};
use crate::model::{GraphNode, Resource, Statement};
use crate::naming::NodeNamer;
use crate::synthesize::{ObjectPropertySynthesizer, PropertySide};
use crate::triple::InternalEdge;
use indexmap::IndexSet;
use log::{debug, trace};
use std::collections::HashSet;

/// URIs of nodes (OWL restrictions) that must never reach the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedNodes {
    uris: HashSet<String>,
}

impl ExcludedNodes {
    /// Create an empty exclusion set.
    pub fn new() -> Self {
        Self {
            uris: HashSet::new(),
        }
    }

    /// Exclude a URI.
    pub fn insert(&mut self, uri: impl Into<String>) {
        self.uris.insert(uri.into());
    }

    /// Whether a URI is excluded.
    pub fn contains(&self, uri: &str) -> bool {
        self.uris.contains(uri)
    }

    /// Whether a resource is excluded.
    pub fn contains_resource(&self, resource: &Resource) -> bool {
        self.contains(resource.uri())
    }

    /// Number of excluded URIs.
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Check if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExcludedNodes {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            uris: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of walking every statement once.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Edges in encounter order
    pub edges: Vec<InternalEdge>,
    /// Literal values seen as statement objects
    pub literals: IndexSet<String>,
    /// Domain/range declarations, present when synthesis is enabled
    pub synthesizer: Option<ObjectPropertySynthesizer>,
}

/// Walks statements, filters excluded nodes and resolves names.
pub struct TripleExtractor<'a> {
    namer: &'a NodeNamer,
    excluded: &'a ExcludedNodes,
    synthesize: bool,
}

impl<'a> TripleExtractor<'a> {
    /// Create an extractor.
    ///
    /// With `synthesize` set, `rdfs:domain`/`rdfs:range` statements are
    /// diverted to an [`ObjectPropertySynthesizer`] instead of becoming edges.
    pub fn new(namer: &'a NodeNamer, excluded: &'a ExcludedNodes, synthesize: bool) -> Self {
        Self {
            namer,
            excluded,
            synthesize,
        }
    }

    /// Walk `statements` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::NullTripleMember`] for the first statement that
    /// lacks a subject or predicate. Nothing extracted so far is returned.
    pub fn extract(&self, statements: &[Statement]) -> Result<Extraction> {
        let mut extraction = Extraction {
            synthesizer: self.synthesize.then(ObjectPropertySynthesizer::new),
            ..Default::default()
        };
        let mut skipped = 0usize;

        for (position, st) in statements.iter().enumerate() {
            let subject = st.subject.as_ref().ok_or(ConvertError::NullTripleMember {
                position,
                member: TripleMember::Subject,
            })?;
            let predicate = st.predicate.as_ref().ok_or(ConvertError::NullTripleMember {
                position,
                member: TripleMember::Predicate,
            })?;

            if self.excluded.contains_resource(subject) {
                skipped += 1;
                continue;
            }

            match &st.object {
                GraphNode::Literal(literal) => {
                    extraction.literals.insert(literal.lexical().to_string());
                }
                GraphNode::Resource(object) => {
                    if self.excluded.contains_resource(object) {
                        skipped += 1;
                        continue;
                    }

                    if let (Some(synth), Some(side)) = (
                        extraction.synthesizer.as_mut(),
                        PropertySide::from_predicate(predicate.uri()),
                    ) {
                        synth.accumulate(subject.uri(), side, object.uri());
                        continue;
                    }
                }
            }

            let edge = InternalEdge::new(
                self.namer.name_resource(subject),
                self.namer.name(&st.object),
                self.namer.name_resource(predicate),
            );
            trace!("Extracted {edge}");
            extraction.edges.push(edge);
        }

        debug!(
            "Extracted {} edges from {} statements ({} skipped as excluded)",
            extraction.edges.len(),
            statements.len(),
            skipped
        );

        Ok(extraction)
    }
}
