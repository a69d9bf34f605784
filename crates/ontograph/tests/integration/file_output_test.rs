//! Tests for writing documents and reading configuration from disk.

use crate::common::*;
use ontograph::{ConversionConfig, ConvertError, GraphMLConverter, NamingMode};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("person.graphml");
    let model = person_knows_model();

    let converter = GraphMLConverter::new(&model, config(NamingMode::LocalName, true));
    converter.save_to_file(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, format!("{}\n", converter.generate_graphml().unwrap()));
}

#[test]
fn test_save_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("out.graphml");
    let model = person_knows_model();

    let err = GraphMLConverter::new(&model, config(NamingMode::LocalName, true))
        .save_to_file(&path)
        .unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
}

#[test]
fn test_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ontograph.json");
    let config = config(NamingMode::Prefixed, true);
    fs::write(&path, config.to_json_string().unwrap()).unwrap();

    let loaded = ConversionConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_file_missing() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConversionConfig::from_json_file(&temp_dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
}
