//! End-to-end conversion of an ontology model into GraphML.
//!
//! ```text
//! NodeClassifier ─┐
//! NodeNamer ──────┼─> TripleExtractor ─> ObjectPropertySynthesizer ─┐
//!                 └──────────────────────────────────────────────────┴─> export_graphml
//! ```
//!
//! Each stage hands an owned value to the next; nothing is mutated after
//! handoff and no state outlives a run.

use crate::classify::{ClassificationSets, NodeClassifier};
use crate::config::ConversionConfig;
use crate::error::Result;
use crate::export::{export_graphml, write_graphml};
use crate::extract::{ExcludedNodes, TripleExtractor};
use crate::model::OntologyModel;
use crate::naming::{NodeNamer, PrefixMap};
use crate::triple::{dump_edges, InternalEdge};
use log::{debug, info};
use std::path::Path;

/// Classified, name-resolved graph ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    classification: ClassificationSets,
    edges: Vec<InternalEdge>,
}

impl Transformation {
    /// Final classification sets, literals included.
    pub fn classification(&self) -> &ClassificationSets {
        &self.classification
    }

    /// Ordered edge list: extracted edges first, synthesized edges last.
    pub fn edges(&self) -> &[InternalEdge] {
        &self.edges
    }

    /// Serialize with the style and propagation of `config`.
    pub fn to_graphml(&self, config: &ConversionConfig) -> String {
        export_graphml(
            &self.edges,
            &self.classification,
            &config.style,
            config.color_propagation,
        )
    }
}

/// Drives one ontology model through the conversion pipeline.
///
/// # Example
///
/// ```rust,ignore
/// let converter = GraphMLConverter::new(&model, config)
///     .with_class_uris(model.class_uris())
///     .with_excluded_nodes(model.restriction_nodes());
/// let graphml = converter.generate_graphml()?;
/// ```
pub struct GraphMLConverter<'m> {
    model: &'m dyn OntologyModel,
    config: ConversionConfig,
    class_uris: Vec<String>,
    excluded: ExcludedNodes,
    prefixes: PrefixMap,
}

impl<'m> GraphMLConverter<'m> {
    /// Create a converter over `model`.
    pub fn new(model: &'m dyn OntologyModel, config: ConversionConfig) -> Self {
        Self {
            model,
            config,
            class_uris: Vec::new(),
            excluded: ExcludedNodes::new(),
            prefixes: PrefixMap::new(),
        }
    }

    /// URIs that count as classes.
    pub fn with_class_uris(mut self, class_uris: Vec<String>) -> Self {
        self.class_uris = class_uris;
        self
    }

    /// URIs (restriction nodes) to drop from the output.
    pub fn with_excluded_nodes<I, S>(mut self, uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = uris.into_iter().collect();
        self
    }

    /// Namespace prefixes for [`crate::NamingMode::Prefixed`].
    pub fn with_prefixes(mut self, prefixes: PrefixMap) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Classify nodes, extract edges and synthesize object properties.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConvertError::NullTripleMember`] if the model yields
    /// a statement without subject or predicate.
    pub fn apply_transformations(&self) -> Result<Transformation> {
        let namer = NodeNamer::new(self.config.naming_mode, self.prefixes.clone());
        debug!(
            "Transforming model: naming={}, synthesize={}, excluded={}",
            namer.mode(),
            self.config.synthesize_object_properties,
            self.excluded.len()
        );

        let classification =
            NodeClassifier::new(&namer).classify(self.model, &self.class_uris);

        let statements = self.model.statements();
        let extraction = TripleExtractor::new(
            &namer,
            &self.excluded,
            self.config.synthesize_object_properties,
        )
        .extract(&statements)?;

        let mut edges = extraction.edges;
        if let Some(synth) = extraction.synthesizer {
            edges.extend(synth.finalize(self.model, &namer));
        }

        debug!("{}", dump_edges(&edges));

        Ok(Transformation {
            classification: classification.with_literals(extraction.literals),
            edges,
        })
    }

    /// Run the pipeline and return the GraphML document.
    pub fn generate_graphml(&self) -> Result<String> {
        let transformation = self.apply_transformations()?;
        Ok(transformation.to_graphml(&self.config))
    }

    /// Run the pipeline and write the document to `path`.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let document = self.generate_graphml()?;
        write_graphml(path, &document)?;
        info!("GraphML written to {}", path.display());
        Ok(())
    }
}
