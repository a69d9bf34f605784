//! Export of transformed graphs for external diagramming tools.
//!
//! - **GraphML**: yEd-flavoured GraphML with per-role colors and shapes
//! - **Style**: the role → color/shape configuration and color palette
//! - **File output**: a single scoped write of a finished document

pub mod graphml;
pub mod style;

pub use graphml::export_graphml;
pub use style::{hex_color, ColorPropagation, NodeStyle, StyleConfig};

use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a finished document to `path`, followed by a newline.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] if the file cannot be created or written.
pub fn write_graphml(path: &Path, document: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ConvertError::io(
            format!("Failed to create GraphML file: {}", path.display()),
            Some(e),
        )
    })?;

    writeln!(file, "{document}").map_err(|e| {
        ConvertError::io(
            format!("Failed to write GraphML file: {}", path.display()),
            Some(e),
        )
    })?;

    Ok(())
}
