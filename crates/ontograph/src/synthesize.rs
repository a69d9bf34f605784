//! Collapsing `rdfs:domain`/`rdfs:range` declarations into direct edges.
//!
//! The synthesizer works in two phases. [`ObjectPropertySynthesizer::accumulate`]
//! only records data, in any order; [`ObjectPropertySynthesizer::finalize`]
//! consumes the synthesizer and emits one edge per property, so a property can
//! never be emitted twice.

use crate::model::OntologyModel;
use crate::naming::NodeNamer;
use crate::triple::InternalEdge;
use crate::vocab;
use indexmap::IndexMap;
use log::{debug, trace};

/// Which side of a property a declaration sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertySide {
    /// `rdfs:domain`
    Domain,
    /// `rdfs:range`
    Range,
}

impl PropertySide {
    /// Side declared by a predicate URI, if it is `rdfs:domain` or `rdfs:range`.
    pub fn from_predicate(uri: &str) -> Option<Self> {
        match uri {
            vocab::RDFS_DOMAIN => Some(PropertySide::Domain),
            vocab::RDFS_RANGE => Some(PropertySide::Range),
            _ => None,
        }
    }
}

/// Domain and range URIs collected for one property.
///
/// A side that is never declared stays `owl:Thing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingObjectProperty {
    /// Domain class URI
    pub domain: String,
    /// Range class URI
    pub range: String,
}

impl Default for PendingObjectProperty {
    fn default() -> Self {
        Self {
            domain: vocab::OWL_THING.to_string(),
            range: vocab::OWL_THING.to_string(),
        }
    }
}

/// Accumulates domain/range declarations per property URI.
#[derive(Debug, Clone, Default)]
pub struct ObjectPropertySynthesizer {
    pending: IndexMap<String, PendingObjectProperty>,
}

impl ObjectPropertySynthesizer {
    /// Create an empty synthesizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one domain or range declaration.
    ///
    /// A later declaration for the same side overwrites the earlier one.
    pub fn accumulate(&mut self, property_uri: &str, side: PropertySide, other_uri: &str) {
        trace!("Accumulating {side:?} {other_uri} for {property_uri}");
        let entry = self.pending.entry(property_uri.to_string()).or_default();
        match side {
            PropertySide::Domain => entry.domain = other_uri.to_string(),
            PropertySide::Range => entry.range = other_uri.to_string(),
        }
    }

    /// Pending entry for a property URI.
    pub fn get(&self, property_uri: &str) -> Option<&PendingObjectProperty> {
        self.pending.get(property_uri)
    }

    /// Number of properties seen so far.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if no declarations were recorded.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Emit one domain→range edge per property, in first-seen order.
    pub fn finalize(self, model: &dyn OntologyModel, namer: &NodeNamer) -> Vec<InternalEdge> {
        debug!("Synthesizing {} object property edges", self.pending.len());
        self.pending
            .into_iter()
            .map(|(property, pair)| {
                InternalEdge::new(
                    namer.name_uri(model, &pair.domain),
                    namer.name_uri(model, &pair.range),
                    namer.name_uri(model, &property),
                )
            })
            .collect()
    }
}
