//! GraphML export in the yEd dialect.
//!
//! Produces one `<node>` per distinct display name, declared in first-seen
//! order across the edge list, followed by one `<edge>` per internal edge.
//! Edge ids are `eid_<label>_<counter>`; the counter never contains `_`, so
//! two edges cannot share an id whatever their labels end with.
//! Coordinates are placeholders; layout is left to the diagramming tool.

use super::style::{hex_color, ColorPropagation, StyleConfig};
use crate::classify::ClassificationSets;
use crate::triple::InternalEdge;
use indexmap::IndexSet;
use log::{debug, trace};

/// Prefix of every node id.
pub const NODE_ID_PREFIX: &str = "nid_";
/// Prefix of every edge id.
pub const EDGE_ID_PREFIX: &str = "eid_";
/// Node width per label character.
pub const WIDTH_SCALE_FACTOR: f64 = 10.0;
/// Fixed node height.
pub const NODE_HEIGHT: f64 = 30.0;

/// Serialize an edge list to a GraphML document.
pub fn export_graphml(
    edges: &[InternalEdge],
    classification: &ClassificationSets,
    style: &StyleConfig,
    propagation: ColorPropagation,
) -> String {
    let mut body = String::new();
    let mut generated: IndexSet<&str> = IndexSet::new();

    for (counter, edge) in edges.iter().enumerate() {
        let source = edge.source.as_str();
        let target = edge.target.as_str();

        let source_style = style.node_style(classification, source);

        if generated.insert(source) {
            trace!("Generating node for {source}");
            body.push_str(&node_element(source, source_style.color, source_style.shape));
        }

        if generated.insert(target) {
            trace!("Generating node for {target}");
            let target_style = match propagation {
                ColorPropagation::Source => source_style,
                ColorPropagation::Own => style.node_style(classification, target),
            };
            body.push_str(&node_element(target, target_style.color, target_style.shape));
        }

        let edge_color = match propagation {
            ColorPropagation::Source => style.edge_color(classification, source),
            ColorPropagation::Own => style.edge_color(classification, &edge.label),
        };
        trace!(
            "Generating edge {} from {source} to {target}",
            edge.label
        );
        body.push_str(&edge_element(&edge.label, counter, source, target, edge_color));
    }

    debug!(
        "Serialized GraphML with {} nodes and {} edges",
        generated.len(),
        edges.len()
    );

    let mut output = header(edges.len(), generated.len());
    output.push_str(&body);
    output.push_str(TAIL);
    output
}

fn header(edges: usize, nodes: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns/graphml" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:y="http://www.yworks.com/xml/graphml" xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns/graphml http://www.yworks.com/xml/schema/graphml/1.0/ygraphml.xsd">
   <key for="node" id="d0" yfiles.type="nodegraphics" />
   <key attr.name="description" attr.type="string" for="node" id="d1" />
   <key for="edge" id="d2" yfiles.type="edgegraphics" />
   <key attr.name="description" attr.type="string" for="edge" id="d3" />
   <key for="graphml" id="d4" yfiles.type="resources" />
   <graph edgedefault="directed" id="G" parse.edges="{edges}" parse.nodes="{nodes}" parse.order="free">
"#
    )
}

const TAIL: &str = "   </graph>\n</graphml>";

/// Width of a node labelled `label`; empty labels count as one character.
pub fn node_width(label: &str) -> f64 {
    label.chars().count().max(1) as f64 * WIDTH_SCALE_FACTOR
}

fn node_element(label: &str, color: &str, shape: &str) -> String {
    let width = node_width(label);
    let label = escape_xml(label);
    let fill = hex_color(color);
    let shape = escape_xml(shape);
    format!(
        r##"      <node id="{NODE_ID_PREFIX}{label}">
         <data key="d0">
            <y:ShapeNode>
               <y:Geometry height="{NODE_HEIGHT:.1}" width="{width:.1}" x="0.0" y="0.0" />
               <y:Fill color="{fill}" transparent="false" />
               <y:BorderStyle color="#000000" type="line" width="1.0" />
               <y:NodeLabel alignment="center" autoSizePolicy="content" fontFamily="Dialog" fontSize="12" fontStyle="plain" hasBackgroundColor="false" hasLineColor="false" modelName="internal" modelPosition="c" textColor="#000000" visible="true">{label}</y:NodeLabel>
               <y:Shape type="{shape}" />
            </y:ShapeNode>
         </data>
         <data key="d1" />
      </node>
"##
    )
}

fn edge_element(label: &str, counter: usize, source: &str, target: &str, color: &str) -> String {
    let label = escape_xml(label);
    let source = escape_xml(source);
    let target = escape_xml(target);
    let line = hex_color(color);
    format!(
        r##"    <edge id="{EDGE_ID_PREFIX}{label}_{counter}" source="{NODE_ID_PREFIX}{source}" target="{NODE_ID_PREFIX}{target}">
         <data key="d2">
            <y:PolyLineEdge>
               <y:LineStyle color="{line}" type="line" width="1.0" />
               <y:Arrows source="none" target="normal" />
               <y:EdgeLabel alignment="center" distance="2.0" fontFamily="Dialog" fontSize="12" fontStyle="plain" hasBackgroundColor="false" hasLineColor="false" modelName="six_pos" modelPosition="tail" preferredPlacement="anywhere" ratio="0.5" textColor="#000000" visible="true">{label}</y:EdgeLabel>
               <y:BendStyle smoothed="false" />
            </y:PolyLineEdge>
         </data>
         <data key="d3" />
      </edge>
"##
    )
}

/// Escape the five XML special characters.
///
/// Characters XML 1.0 cannot carry at all (most C0 controls, U+FFFE and
/// U+FFFF) are replaced with U+FFFD.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if !is_xml_char(c) => out.push(char::REPLACEMENT_CHARACTER),
            _ => out.push(c),
        }
    }
    out
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
