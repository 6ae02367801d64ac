//! Integration tests for the FHIR ValueSet source.

use std::fs;
use std::path::PathBuf;

use fixture_ingest::{common_unit_concepts, load_value_set};
use fixture_model::FixtureError;
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write source file");
    path
}

#[test]
fn loads_concepts_from_compose_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_source(
        &dir,
        "common.json",
        r#"{"resourceType":"ValueSet","compose":{"include":[{"system":"http://unitsofmeasure.org","concept":[{"code":"mg","display":"milligram"},{"code":"kg","display":"kilogram"}]}]}}"#,
    );

    let value_set = load_value_set(&path).expect("load value set");
    let concepts = common_unit_concepts(&value_set, &path).expect("extract concepts");

    assert_eq!(concepts.len(), 2);
    assert_eq!(concepts[0].code, "mg");
    assert_eq!(concepts[0].display.as_deref(), Some("milligram"));
    assert_eq!(concepts[1].code, "kg");
}

#[test]
fn missing_file_is_source_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.json");

    let error = load_value_set(&path).expect_err("load should fail");
    assert!(matches!(error, FixtureError::SourceNotFound { .. }));
}

#[test]
fn malformed_json_is_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_source(&dir, "broken.json", "{\"compose\": [not json");

    let error = load_value_set(&path).expect_err("load should fail");
    assert!(matches!(error, FixtureError::Parse { .. }));
}

#[test]
fn missing_compose_is_schema_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_source(&dir, "no_compose.json", r#"{"resourceType":"ValueSet"}"#);

    let value_set = load_value_set(&path).expect("load value set");
    let error = common_unit_concepts(&value_set, &path).expect_err("extract should fail");
    assert!(matches!(error, FixtureError::Schema { .. }));
}

#[test]
fn empty_include_list_is_schema_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_source(&dir, "no_include.json", r#"{"compose":{"include":[]}}"#);

    let value_set = load_value_set(&path).expect("load value set");
    let error = common_unit_concepts(&value_set, &path).expect_err("extract should fail");
    assert!(matches!(error, FixtureError::Schema { .. }));
}

#[test]
fn empty_concept_list_is_not_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_source(&dir, "empty.json", r#"{"compose":{"include":[{"concept":[]}]}}"#);

    let value_set = load_value_set(&path).expect("load value set");
    let concepts = common_unit_concepts(&value_set, &path).expect("extract concepts");
    assert!(concepts.is_empty());
}

#[test]
fn concept_without_display_deserializes() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_source(
        &dir,
        "no_display.json",
        r#"{"compose":{"include":[{"concept":[{"code":"s"}]}]}}"#,
    );

    let value_set = load_value_set(&path).expect("load value set");
    let concepts = common_unit_concepts(&value_set, &path).expect("extract concepts");
    assert_eq!(concepts[0].code, "s");
    assert!(concepts[0].display.is_none());
}
