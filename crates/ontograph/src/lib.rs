//! # ontograph
//!
//! Turns an ontology graph (classes, individuals and properties described as
//! subject–predicate–object statements) into a GraphML document that yEd and
//! similar diagramming tools open directly.
//!
//! ## Pipeline
//!
//! ```text
//! OntologyModel (caller-loaded)
//!     ↓
//! NodeClassifier + NodeNamer (roles and display names)
//!     ↓
//! TripleExtractor (filter restrictions, resolve names)
//!     ↓
//! ObjectPropertySynthesizer (domain/range → one arrow)
//!     ↓
//! export_graphml (nodes, edges, styling)
//! ```
//!
//! Loading ontology files is up to the caller; anything implementing
//! [`OntologyModel`] can be converted. Layout is left to the diagramming tool.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ontograph::{vocab, ConversionConfig, GraphMLConverter, MemoryModel, NamingMode};
//!
//! let mut model = MemoryModel::new();
//! model.add_type("http://example.org/onto#Person", vocab::OWL_CLASS);
//! model.add("http://example.org/onto#knows", vocab::RDFS_DOMAIN, "http://example.org/onto#Person");
//! model.add("http://example.org/onto#knows", vocab::RDFS_RANGE, "http://example.org/onto#Person");
//!
//! let config = ConversionConfig::from_json_file("ontograph.json".as_ref()).unwrap()
//!     .with_naming_mode(NamingMode::LocalName)
//!     .with_synthesis(true);
//!
//! let graphml = GraphMLConverter::new(&model, config)
//!     .with_class_uris(model.class_uris())
//!     .with_excluded_nodes(model.restriction_nodes())
//!     .generate_graphml()
//!     .unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod synthesize;
pub mod triple;
pub mod vocab;

// Re-export main types
pub use classify::{ClassificationSets, NodeClassifier, NodeRole};
pub use config::ConversionConfig;
pub use error::{ConvertError, Result, TripleMember};
pub use export::{export_graphml, write_graphml, ColorPropagation, StyleConfig};
pub use extract::{ExcludedNodes, Extraction, TripleExtractor};
pub use model::{GraphNode, Literal, MemoryModel, OntologyModel, Resource, Statement};
pub use naming::{NamingMode, NodeNamer, PrefixMap};
pub use pipeline::{GraphMLConverter, Transformation};
pub use synthesize::{ObjectPropertySynthesizer, PendingObjectProperty, PropertySide};
pub use triple::InternalEdge;
