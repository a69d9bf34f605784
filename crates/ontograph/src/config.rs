//! Conversion settings.
//!
//! Configuration is plain JSON:
//!
//! ```json
//! {
//!   "namingMode": "localName",
//!   "synthesizeObjectProperties": true,
//!   "colorPropagation": "source",
//!   "style": {
//!     "classColor": "orange", "individualColor": "yellow",
//!     "literalColor": "green", "arrowColor": "blue",
//!     "classShape": "ellipse", "individualShape": "rectangle",
//!     "literalShape": "roundrectangle"
//!   }
//! }
//! ```
//!
//! Style keys are validated when the configuration is loaded, never later.

use crate::error::{ConvertError, Result};
use crate::export::style::{ColorPropagation, StyleConfig};
use crate::naming::NamingMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionConfig {
    /// How nodes are named
    #[serde(default)]
    pub naming_mode: NamingMode,

    /// Collapse `rdfs:domain`/`rdfs:range` pairs into direct edges
    #[serde(default)]
    pub synthesize_object_properties: bool,

    /// How newly declared edge targets are styled
    #[serde(default)]
    pub color_propagation: ColorPropagation,

    /// Role colors and shapes
    pub style: StyleConfig,
}

// Keeps the style as a raw map so a missing key surfaces as MissingStyleKey
// rather than an opaque deserialization message.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    naming_mode: NamingMode,
    #[serde(default)]
    synthesize_object_properties: bool,
    #[serde(default)]
    color_propagation: ColorPropagation,
    #[serde(default)]
    style: HashMap<String, String>,
}

impl ConversionConfig {
    /// Create a config with default switches around a validated style.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            naming_mode: NamingMode::default(),
            synthesize_object_properties: false,
            color_propagation: ColorPropagation::default(),
            style,
        }
    }

    /// Set the naming mode
    pub fn with_naming_mode(mut self, mode: NamingMode) -> Self {
        self.naming_mode = mode;
        self
    }

    /// Enable or disable object property synthesis
    pub fn with_synthesis(mut self, synthesize: bool) -> Self {
        self.synthesize_object_properties = synthesize;
        self
    }

    /// Set how edge targets are styled
    pub fn with_color_propagation(mut self, propagation: ColorPropagation) -> Self {
        self.color_propagation = propagation;
        self
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Serialization`] for malformed JSON or unknown
    /// enum values, and [`ConvertError::MissingStyleKey`] when a style key is
    /// absent.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)
            .map_err(|e| ConvertError::serialization("Failed to parse configuration", Some(e)))?;

        Ok(Self {
            naming_mode: raw.naming_mode,
            synthesize_object_properties: raw.synthesize_object_properties,
            color_propagation: raw.color_propagation,
            style: StyleConfig::from_keys(&raw.style)?,
        })
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`ConversionConfig::from_json_str`].
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::io(
                format!("Failed to read configuration: {}", path.display()),
                Some(e),
            )
        })?;
        Self::from_json_str(&text)
    }

    /// Render the configuration as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::serialization("Failed to serialize configuration", Some(e)))
    }
}
