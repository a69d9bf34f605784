//! Node and edge styling by role.

use crate::classify::{ClassificationSets, NodeRole};
use crate::error::{ConvertError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fill color of nodes without a role.
pub const DEFAULT_NODE_COLOR: &str = "white";
/// Shape of nodes without a role.
pub const DEFAULT_NODE_SHAPE: &str = "rectangle";
/// Line color of edges whose label is not a known property.
pub const DEFAULT_EDGE_COLOR: &str = "black";
/// Hex value emitted for color names outside the palette.
pub const INVALID_HEX_COLOR: &str = "#00000000";

/// Keys every style configuration must define.
pub const STYLE_KEYS: [&str; 7] = [
    "classColor",
    "individualColor",
    "literalColor",
    "arrowColor",
    "classShape",
    "individualShape",
    "literalShape",
];

/// Map a palette color name to its hex code.
///
/// Unknown names map to [`INVALID_HEX_COLOR`] instead of failing.
pub fn hex_color(name: &str) -> &'static str {
    match name {
        "black" => "#000000",
        "red" => "#FF0000",
        "blue" => "#0000FF",
        "green" => "#00FF00",
        "orange" => "#FFA500",
        "yellow" => "#FFFF00",
        "white" => "#FFFFFF",
        _ => INVALID_HEX_COLOR,
    }
}

/// Which classification colors a newly declared edge target.
///
/// The same switch also picks the key used for edge line colors: choosing
/// [`ColorPropagation::Own`] changes edge colors as well as target nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorPropagation {
    /// Targets are styled like the source of the edge that declares them, and
    /// edge color is looked up by source name.
    #[default]
    Source,
    /// Targets are styled by their own role, and edge color is looked up by
    /// edge label.
    Own,
}

/// Resolved fill color name and shape of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle<'a> {
    /// Palette color name
    pub color: &'a str,
    /// yEd shape type
    pub shape: &'a str,
}

/// Colors and shapes per role. Every key is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct StyleConfig {
    class_color: String,
    individual_color: String,
    literal_color: String,
    arrow_color: String,
    class_shape: String,
    individual_shape: String,
    literal_shape: String,
}

impl StyleConfig {
    /// Build a style from a key map.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MissingStyleKey`] naming the first key of
    /// [`STYLE_KEYS`] that is absent, or [`ConvertError::InvalidConfig`] if a
    /// value is blank. Color names outside the palette are accepted with a
    /// warning and render as [`INVALID_HEX_COLOR`].
    pub fn from_keys(keys: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| -> Result<String> {
            let value = keys.get(key).ok_or_else(|| ConvertError::MissingStyleKey {
                key: key.to_string(),
            })?;
            if value.trim().is_empty() {
                return Err(ConvertError::InvalidConfig {
                    message: format!("style key '{key}' has an empty value"),
                });
            }
            if key.ends_with("Color") && hex_color(value) == INVALID_HEX_COLOR {
                warn!("Unknown color '{value}' for {key}, rendering as {INVALID_HEX_COLOR}");
            }
            Ok(value.clone())
        };

        Ok(Self {
            class_color: get("classColor")?,
            individual_color: get("individualColor")?,
            literal_color: get("literalColor")?,
            arrow_color: get("arrowColor")?,
            class_shape: get("classShape")?,
            individual_shape: get("individualShape")?,
            literal_shape: get("literalShape")?,
        })
    }

    /// Value configured for a style key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "classColor" => &self.class_color,
            "individualColor" => &self.individual_color,
            "literalColor" => &self.literal_color,
            "arrowColor" => &self.arrow_color,
            "classShape" => &self.class_shape,
            "individualShape" => &self.individual_shape,
            "literalShape" => &self.literal_shape,
            _ => return None,
        };
        Some(value)
    }

    /// Color and shape configured for a role.
    pub fn for_role(&self, role: NodeRole) -> NodeStyle<'_> {
        match role {
            NodeRole::Class => NodeStyle {
                color: &self.class_color,
                shape: &self.class_shape,
            },
            NodeRole::Individual => NodeStyle {
                color: &self.individual_color,
                shape: &self.individual_shape,
            },
            NodeRole::Literal => NodeStyle {
                color: &self.literal_color,
                shape: &self.literal_shape,
            },
        }
    }

    /// Style of the node called `name`, falling back to white rectangles.
    pub fn node_style(&self, classification: &ClassificationSets, name: &str) -> NodeStyle<'_> {
        match classification.role_of(name) {
            Some(role) => self.for_role(role),
            None => NodeStyle {
                color: DEFAULT_NODE_COLOR,
                shape: DEFAULT_NODE_SHAPE,
            },
        }
    }

    /// Line color for an edge keyed by `name`, falling back to black.
    pub fn edge_color(&self, classification: &ClassificationSets, name: &str) -> &str {
        if classification.is_property(name) {
            &self.arrow_color
        } else {
            DEFAULT_EDGE_COLOR
        }
    }
}

impl TryFrom<HashMap<String, String>> for StyleConfig {
    type Error = ConvertError;

    fn try_from(keys: HashMap<String, String>) -> Result<Self> {
        Self::from_keys(&keys)
    }
}

impl From<StyleConfig> for HashMap<String, String> {
    fn from(style: StyleConfig) -> Self {
        STYLE_KEYS
            .iter()
            .filter_map(|key| style.get(key).map(|v| (key.to_string(), v.to_string())))
            .collect()
    }
}
