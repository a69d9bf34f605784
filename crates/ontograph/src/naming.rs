//! Canonical display names for graph nodes.
//!
//! Every lookup downstream of the namer (classification membership, node ids,
//! edge endpoints) compares names as strings, so [`NodeNamer::name`] must stay
//! a pure function of the node, the mode and the prefix map.

use crate::model::{GraphNode, OntologyModel, Resource};
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How resources are rendered as labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingMode {
    /// Full URI
    #[default]
    Uri,
    /// Fragment after the last `#` or `/`
    LocalName,
    /// `prefix:localName` when the namespace has a known prefix
    Prefixed,
}

impl std::fmt::Display for NamingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamingMode::Uri => write!(f, "uri"),
            NamingMode::LocalName => write!(f, "localName"),
            NamingMode::Prefixed => write!(f, "prefixed"),
        }
    }
}

/// Namespace → prefix mapping used in [`NamingMode::Prefixed`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixMap {
    prefixes: HashMap<String, String>,
}

impl PrefixMap {
    /// Create an empty prefix map.
    pub fn new() -> Self {
        Self {
            prefixes: HashMap::new(),
        }
    }

    /// Builder pattern: map a namespace to a prefix and return self.
    pub fn with(mut self, namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.insert(namespace, prefix);
        self
    }

    /// Map a namespace to a prefix.
    pub fn insert(&mut self, namespace: impl Into<String>, prefix: impl Into<String>) {
        self.prefixes.insert(namespace.into(), prefix.into());
    }

    /// Prefix registered for a namespace.
    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.prefixes.get(namespace).map(String::as_str)
    }

    /// Number of registered namespaces.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Check if no namespaces are registered.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl FromIterator<(String, String)> for PrefixMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            prefixes: HashMap::from_iter(iter),
        }
    }
}

/// Resolves nodes to their canonical display name.
#[derive(Debug, Clone, Default)]
pub struct NodeNamer {
    mode: NamingMode,
    prefixes: PrefixMap,
}

impl NodeNamer {
    /// Create a namer for the given mode and prefix map.
    pub fn new(mode: NamingMode, prefixes: PrefixMap) -> Self {
        Self { mode, prefixes }
    }

    /// Active naming mode.
    pub fn mode(&self) -> NamingMode {
        self.mode
    }

    /// Canonical name of any node. Literals render verbatim in every mode.
    pub fn name(&self, node: &GraphNode) -> String {
        match node {
            GraphNode::Literal(literal) => literal.lexical().to_string(),
            GraphNode::Resource(resource) => self.name_resource(resource),
        }
    }

    /// Canonical name of a resource.
    pub fn name_resource(&self, resource: &Resource) -> String {
        match self.mode {
            NamingMode::Uri => resource.uri().to_string(),
            NamingMode::LocalName => resource.local_name().to_string(),
            NamingMode::Prefixed => self.prefixed(resource),
        }
    }

    /// Canonical name of a bare URI, resolved through the model.
    pub fn name_uri(&self, model: &dyn OntologyModel, uri: &str) -> String {
        self.name_resource(&model.resource(uri))
    }

    fn prefixed(&self, resource: &Resource) -> String {
        let uri = resource.uri();
        let Some(namespace) = resource.namespace() else {
            return uri.to_string();
        };

        let prefix = self.prefixes.get(namespace);
        trace!("{uri} looking for namespace {namespace} found {prefix:?}");

        match (prefix, uri.strip_prefix(namespace)) {
            (Some(prefix), Some(local)) => format!("{prefix}:{local}"),
            // unmapped namespace, fall back to the full URI
            _ => uri.to_string(),
        }
    }
}
