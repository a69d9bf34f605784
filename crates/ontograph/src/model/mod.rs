//! Ontology model abstractions.
//!
//! This module defines the node and statement types the converter consumes and
//! the [`OntologyModel`] trait a loaded ontology must implement:
//! - [`Resource`]: a URI-identified node (blank nodes use `_:` URIs)
//! - [`Literal`]: a raw value carried by a statement object
//! - [`Statement`]: one subject–predicate–object fact
//! - [`MemoryModel`]: an in-memory model for tests and small tools
//!
//! Parsing ontology files is left to the caller; any store that can enumerate
//! statements and the individuals/properties it knows about can drive the
//! pipeline.

mod memory;

pub use memory::MemoryModel;

use serde::{Deserialize, Serialize};

/// A named graph node identified by its URI.
///
/// Equality and hashing consider the URI only.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Resource {
    uri: String,
    namespace: Option<String>,
}

impl Resource {
    /// Create a resource, deriving its namespace from the URI.
    ///
    /// The namespace is the URI up to and including the last `#` or `/`.
    /// Blank nodes (`_:` URIs) and URIs without either separator have none.
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let namespace = if uri.starts_with("_:") {
            None
        } else {
            uri.rfind(['#', '/']).map(|idx| uri[..=idx].to_string())
        };
        Self { uri, namespace }
    }

    /// Create a resource with an explicit namespace.
    pub fn with_namespace(uri: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            namespace: Some(namespace.into()),
        }
    }

    /// Create a blank node with the given label.
    pub fn blank(label: &str) -> Self {
        Self::new(format!("_:{label}"))
    }

    /// Full URI of the resource.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Namespace of the resource, if it has one.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Whether this resource is a blank node.
    pub fn is_blank(&self) -> bool {
        self.uri.starts_with("_:")
    }

    /// The fragment or last path segment of the URI.
    ///
    /// Returns the substring after the last `#` or `/`, or the whole URI when
    /// neither is present.
    pub fn local_name(&self) -> &str {
        match self.uri.rfind(['#', '/']) {
            Some(idx) => &self.uri[idx + 1..],
            None => &self.uri,
        }
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl std::hash::Hash for Resource {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri)
    }
}

/// A literal value. Identity is the lexical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    lexical: String,
}

impl Literal {
    /// Create a literal from its lexical form.
    pub fn new(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
        }
    }

    /// The lexical value, verbatim.
    pub fn lexical(&self) -> &str {
        &self.lexical
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexical)
    }
}

/// Any node that can appear as a statement object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphNode {
    /// URI-identified node
    Resource(Resource),
    /// Raw value
    Literal(Literal),
}

impl GraphNode {
    /// Whether this node is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, GraphNode::Literal(_))
    }

    /// The resource behind this node, if it is one.
    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            GraphNode::Resource(r) => Some(r),
            GraphNode::Literal(_) => None,
        }
    }
}

impl From<Resource> for GraphNode {
    fn from(value: Resource) -> Self {
        GraphNode::Resource(value)
    }
}

impl From<Literal> for GraphNode {
    fn from(value: Literal) -> Self {
        GraphNode::Literal(value)
    }
}

impl std::fmt::Display for GraphNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphNode::Resource(r) => r.fmt(f),
            GraphNode::Literal(l) => l.fmt(f),
        }
    }
}

/// A subject–predicate–object fact as enumerated by a model.
///
/// Subject and predicate are optional only because a model may hand over a
/// malformed statement; the extractor rejects those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement subject
    pub subject: Option<Resource>,
    /// Statement predicate
    pub predicate: Option<Resource>,
    /// Statement object
    pub object: GraphNode,
}

impl Statement {
    /// Create a well-formed statement.
    pub fn new(subject: Resource, predicate: Resource, object: impl Into<GraphNode>) -> Self {
        Self {
            subject: Some(subject),
            predicate: Some(predicate),
            object: object.into(),
        }
    }
}

/// Read-only view of a loaded ontology.
///
/// Implementations must enumerate statements in a stable order for the
/// lifetime of one conversion run.
pub trait OntologyModel {
    /// All statements, in the model's native enumeration order.
    fn statements(&self) -> Vec<Statement>;

    /// Every individual known to the model.
    fn individuals(&self) -> Vec<Resource>;

    /// Every object-typed property known to the model.
    fn object_properties(&self) -> Vec<Resource>;

    /// Every data-typed property known to the model.
    fn datatype_properties(&self) -> Vec<Resource>;

    /// Resolve a URI to a resource handle.
    fn resource(&self, uri: &str) -> Resource {
        Resource::new(uri)
    }
}
