//! Role classification of graph nodes by display name.
//!
//! Membership is keyed by the rendered name, not by node identity: two nodes
//! that render to the same string share one entry and therefore one style.

use crate::model::{OntologyModel, Resource};
use crate::naming::NodeNamer;
use indexmap::IndexSet;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Visual role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// Ontology class
    Class,
    /// Named individual
    Individual,
    /// Literal value
    Literal,
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRole::Class => write!(f, "Class"),
            NodeRole::Individual => write!(f, "Individual"),
            NodeRole::Literal => write!(f, "Literal"),
        }
    }
}

/// The five name sets produced by classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSets {
    /// Class names
    pub classes: IndexSet<String>,
    /// Individual names
    pub individuals: IndexSet<String>,
    /// Literal values
    pub literals: IndexSet<String>,
    /// Object property names
    pub object_properties: IndexSet<String>,
    /// Datatype property names
    pub data_properties: IndexSet<String>,
}

impl ClassificationSets {
    /// Create empty sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Node role for a name.
    ///
    /// Roles are tested in a fixed order (class, individual, literal) and the
    /// first match wins.
    pub fn role_of(&self, name: &str) -> Option<NodeRole> {
        let chain: [(&IndexSet<String>, NodeRole); 3] = [
            (&self.classes, NodeRole::Class),
            (&self.individuals, NodeRole::Individual),
            (&self.literals, NodeRole::Literal),
        ];
        chain
            .into_iter()
            .find(|(set, _)| set.contains(name))
            .map(|(_, role)| role)
    }

    /// Whether a name belongs to either property set.
    pub fn is_property(&self, name: &str) -> bool {
        self.object_properties.contains(name) || self.data_properties.contains(name)
    }

    /// Merge literal values discovered after the initial classification.
    pub fn with_literals(mut self, literals: impl IntoIterator<Item = String>) -> Self {
        self.literals.extend(literals);
        self
    }
}

/// Builds [`ClassificationSets`] from a model.
///
/// Class detection is the caller's job: the classifier takes the class URIs as
/// given and only queries the model for individuals and properties.
pub struct NodeClassifier<'a> {
    namer: &'a NodeNamer,
}

impl<'a> NodeClassifier<'a> {
    /// Create a classifier that names nodes with `namer`.
    pub fn new(namer: &'a NodeNamer) -> Self {
        Self { namer }
    }

    /// Classify every known node of the model.
    ///
    /// The literal set starts empty; literals are discovered during extraction.
    pub fn classify(&self, model: &dyn OntologyModel, class_uris: &[String]) -> ClassificationSets {
        let classes: IndexSet<String> = class_uris
            .iter()
            .map(|uri| self.namer.name_uri(model, uri))
            .collect();
        report("classes", &classes);

        let individuals = self.names(&model.individuals());
        report("individuals", &individuals);

        let object_properties = self.names(&model.object_properties());
        report("object properties", &object_properties);

        let data_properties = self.names(&model.datatype_properties());
        report("datatype properties", &data_properties);

        ClassificationSets {
            classes,
            individuals,
            literals: IndexSet::new(),
            object_properties,
            data_properties,
        }
    }

    fn names(&self, resources: &[Resource]) -> IndexSet<String> {
        resources
            .iter()
            .map(|r| self.namer.name_resource(r))
            .collect()
    }
}

fn report(kind: &str, names: &IndexSet<String>) {
    if names.is_empty() {
        info!("No {kind} detected");
    } else {
        debug!("{} {kind} detected: {names:?}", names.len());
    }
}
