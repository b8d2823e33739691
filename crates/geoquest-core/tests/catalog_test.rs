//! Integration tests for GeoJSON quest catalog loading.

use std::io::Write;

use geoquest_core::catalog::load_quest_file;
use geoquest_core::error::QuestError;
use geoquest_core::models::QuestId;
use tempfile::NamedTempFile;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

const VALID_CATALOG: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [144.9800, -37.8136] },
      "properties": {
        "id": 1,
        "name": "Fitzroy Gardens",
        "question": "When were the Fitzroy Gardens established?",
        "options": ["1. 1839", "2. 1859"],
        "answer": "2. 1859"
      }
    },
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [144.9803, -37.8304] },
      "properties": {
        "id": 2,
        "name": "Royal Botanic Gardens",
        "question": "What is the total area of the Royal Botanic Gardens?",
        "options": ["1. 38 hectares", "2. 42 hectares"],
        "answer": "1. 38 hectares"
      }
    }
  ]
}"#;

#[test]
fn loads_a_valid_catalog() {
    let file = write_catalog(VALID_CATALOG);

    let quests = load_quest_file(file.path()).unwrap();

    assert_eq!(quests.len(), 2);
    assert_eq!(quests[0].id, QuestId(1));
    assert_eq!(quests[0].name, "Fitzroy Gardens");
    assert_eq!(quests[0].latitude, -37.8136);
    assert_eq!(quests[0].longitude, 144.9800);
    assert_eq!(quests[0].options.len(), 2);
    assert!(!quests[0].completed);
}

#[test]
fn rejects_answer_not_in_options() {
    let file = write_catalog(
        r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [144.98, -37.81] },
      "properties": {
        "id": 1,
        "name": "Somewhere",
        "question": "?",
        "options": ["1. yes", "2. no"],
        "answer": "3. maybe"
      }
    }
  ]
}"#,
    );

    let result = load_quest_file(file.path());

    assert!(matches!(result, Err(QuestError::AnswerNotInOptions { id: QuestId(1) })));
}

#[test]
fn rejects_duplicate_ids() {
    let duplicated = VALID_CATALOG.replace("\"id\": 2", "\"id\": 1");
    let file = write_catalog(&duplicated);

    let result = load_quest_file(file.path());

    assert!(matches!(result, Err(QuestError::DuplicateQuestId { id: QuestId(1) })));
}

#[test]
fn rejects_non_point_geometry() {
    let file = write_catalog(
        r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": {
        "type": "LineString",
        "coordinates": [[144.98, -37.81], [144.99, -37.82]]
      },
      "properties": {
        "id": 1, "name": "A", "question": "?", "options": ["x"], "answer": "x"
      }
    }
  ]
}"#,
    );

    let result = load_quest_file(file.path());

    assert!(matches!(result, Err(QuestError::CatalogInvalid { .. })));
}

#[test]
fn rejects_missing_properties() {
    let file = write_catalog(
        r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [144.98, -37.81] },
      "properties": { "id": 1, "name": "A" }
    }
  ]
}"#,
    );

    let result = load_quest_file(file.path());

    assert!(matches!(result, Err(QuestError::CatalogInvalid { .. })));
}

#[test]
fn rejects_bare_geometry_document() {
    let file = write_catalog(r#"{ "type": "Point", "coordinates": [144.98, -37.81] }"#);

    let result = load_quest_file(file.path());

    assert!(matches!(result, Err(QuestError::CatalogInvalid { .. })));
}

#[test]
fn rejects_malformed_json() {
    let file = write_catalog("{ not geojson");

    let result = load_quest_file(file.path());

    assert!(matches!(result, Err(QuestError::CatalogInvalid { .. })));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = load_quest_file("/nonexistent/quests.geojson");

    assert!(matches!(result, Err(QuestError::Io(_))));
}
