//! Converts a small family ontology to GraphML in every naming mode.
//!
//! Open the files written to `output/` with yEd and apply a layout
//! (Layout → Hierarchical) to see the diagram.

use ontograph::{
    vocab, ColorPropagation, ConversionConfig, GraphMLConverter, MemoryModel, NamingMode,
    PrefixMap,
};
use std::fs;
use std::path::Path;

const EX: &str = "http://example.org/family#";

const CONFIG: &str = r#"{
    "synthesizeObjectProperties": true,
    "style": {
        "classColor": "orange", "individualColor": "yellow",
        "literalColor": "green", "arrowColor": "blue",
        "classShape": "ellipse", "individualShape": "rectangle",
        "literalShape": "roundrectangle"
    }
}"#;

fn ex(local: &str) -> String {
    format!("{EX}{local}")
}

fn main() -> ontograph::Result<()> {
    println!("=== Building Ontology ===\n");

    let mut model = MemoryModel::new();
    for class in ["Person", "Parent", "Pet"] {
        model.add_type(&ex(class), vocab::OWL_CLASS);
    }
    model.add(&ex("Parent"), "http://www.w3.org/2000/01/rdf-schema#subClassOf", &ex("Person"));

    model.add_type(&ex("hasChild"), vocab::OWL_OBJECT_PROPERTY);
    model.add(&ex("hasChild"), vocab::RDFS_DOMAIN, &ex("Parent"));
    model.add(&ex("hasChild"), vocab::RDFS_RANGE, &ex("Person"));
    model.add_type(&ex("owns"), vocab::OWL_OBJECT_PROPERTY);
    model.add(&ex("owns"), vocab::RDFS_DOMAIN, &ex("Person"));
    model.add(&ex("owns"), vocab::RDFS_RANGE, &ex("Pet"));
    model.add_type(&ex("name"), vocab::OWL_DATATYPE_PROPERTY);

    model.add_type(&ex("carol"), &ex("Parent"));
    model.add_type(&ex("dave"), &ex("Person"));
    model.add_type(&ex("rex"), &ex("Pet"));
    model.add(&ex("carol"), &ex("hasChild"), &ex("dave"));
    model.add(&ex("dave"), &ex("owns"), &ex("rex"));
    model.add_literal(&ex("carol"), &ex("name"), "Carol");
    model.add_literal(&ex("dave"), &ex("name"), "Dave");

    // Every parent has at least one child
    model.add_type("_:r0", vocab::OWL_RESTRICTION);
    model.add("_:r0", "http://www.w3.org/2002/07/owl#onProperty", &ex("hasChild"));
    model.add(&ex("Parent"), "http://www.w3.org/2000/01/rdf-schema#subClassOf", "_:r0");

    println!("✓ Added {} statements\n", model.len());

    println!("=== Exporting GraphML ===\n");

    let base = ConversionConfig::from_json_str(CONFIG)?;
    let prefixes = PrefixMap::new()
        .with(EX, "fam")
        .with("http://www.w3.org/2002/07/owl#", "owl");
    fs::create_dir_all("output")
        .map_err(|e| ontograph::ConvertError::io("Failed to create output directory", Some(e)))?;

    for (mode, file) in [
        (NamingMode::Uri, "output/family_uri.graphml"),
        (NamingMode::LocalName, "output/family_local.graphml"),
        (NamingMode::Prefixed, "output/family_prefixed.graphml"),
    ] {
        let converter = GraphMLConverter::new(&model, base.clone().with_naming_mode(mode))
            .with_class_uris(model.class_uris())
            .with_excluded_nodes(model.restriction_nodes())
            .with_prefixes(prefixes.clone());

        let transformation = converter.apply_transformations()?;
        converter.save_to_file(Path::new(file))?;
        println!(
            "✓ {mode}: {} edges, {} literals → {file}",
            transformation.edges().len(),
            transformation.classification().literals.len()
        );
    }

    let converter = GraphMLConverter::new(
        &model,
        base.with_naming_mode(NamingMode::LocalName)
            .with_color_propagation(ColorPropagation::Own),
    )
    .with_class_uris(model.class_uris())
    .with_excluded_nodes(model.restriction_nodes());
    converter.save_to_file(Path::new("output/family_own_colors.graphml"))?;
    println!("✓ own-role coloring → output/family_own_colors.graphml");

    println!("\nOpen the files with yEd and apply a hierarchical layout.");
    Ok(())
}
