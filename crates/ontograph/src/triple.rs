//! Name-resolved edges handed to the serializer.

use serde::{Deserialize, Serialize};

/// One directed, labelled edge between two display names.
///
/// The position of an edge in its list is significant: it decides the order
/// in which nodes are first declared in the output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternalEdge {
    /// Display name of the source node
    pub source: String,
    /// Display name of the target node
    pub target: String,
    /// Edge label (display name of the predicate)
    pub label: String,
}

impl InternalEdge {
    /// Create an edge.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }
}

impl std::fmt::Display for InternalEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> {}", self.source, self.label, self.target)
    }
}

/// Render an edge list as the debug block logged after extraction.
pub fn dump_edges(edges: &[InternalEdge]) -> String {
    let mut res = String::from("----- GML Triples -----\n");
    for edge in edges {
        res.push_str(&format!("{edge}\n"));
    }
    res.push_str("----- End GML Triples -----\n");
    res
}
