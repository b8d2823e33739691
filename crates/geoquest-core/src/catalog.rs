//! Quest catalogs: the built-in quest set and GeoJSON catalog files.
//!
//! A catalog file is a GeoJSON FeatureCollection of Point features, each
//! carrying `id`, `name`, `question`, `options`, and `answer` properties.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{QuestError, Result};
use crate::models::{Quest, QuestId};

/// Load and validate a quest catalog from a GeoJSON file.
pub fn load_quest_file<P: AsRef<Path>>(path: P) -> Result<Vec<Quest>> {
    let content = fs::read_to_string(path.as_ref())?;

    let geojson: geojson::GeoJson = content.parse().map_err(|e| QuestError::CatalogInvalid {
        reason: format!("failed to parse GeoJSON: {}", e),
    })?;

    let collection = match geojson {
        geojson::GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(QuestError::CatalogInvalid {
                reason: "expected a FeatureCollection".to_string(),
            })
        }
    };

    let quests = collection
        .features
        .iter()
        .enumerate()
        .map(|(idx, feature)| convert_feature(feature, idx))
        .collect::<Result<Vec<_>>>()?;

    validate_catalog(&quests)?;

    tracing::debug!(quests = quests.len(), "loaded quest catalog");
    Ok(quests)
}

/// Check the catalog-wide integrity invariants: unique ids, every answer a
/// member of its own option list, coordinates in range.
pub fn validate_catalog(quests: &[Quest]) -> Result<()> {
    let mut seen = HashSet::new();
    for quest in quests {
        if !seen.insert(quest.id) {
            return Err(QuestError::DuplicateQuestId { id: quest.id });
        }
        quest.validate()?;
    }
    Ok(())
}

fn convert_feature(feature: &geojson::Feature, idx: usize) -> Result<Quest> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| QuestError::CatalogInvalid {
            reason: format!("feature {}: missing geometry", idx),
        })?;

    let (longitude, latitude) = match &geometry.value {
        geojson::Value::Point(coords) if coords.len() >= 2 => (coords[0], coords[1]),
        _ => {
            return Err(QuestError::CatalogInvalid {
                reason: format!("feature {}: geometry must be a Point", idx),
            })
        }
    };

    let properties = feature
        .properties
        .as_ref()
        .ok_or_else(|| QuestError::CatalogInvalid {
            reason: format!("feature {}: missing properties", idx),
        })?;

    let id = properties
        .get("id")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| QuestError::CatalogInvalid {
            reason: format!("feature {}: missing or non-integer 'id'", idx),
        })?;

    let options = properties
        .get("options")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| QuestError::CatalogInvalid {
            reason: format!("feature {}: missing 'options' array", idx),
        })?
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| QuestError::CatalogInvalid {
                    reason: format!("feature {}: 'options' must be strings", idx),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Quest {
        id: QuestId(id as u32),
        name: require_string(properties, "name", idx)?,
        latitude,
        longitude,
        question: require_string(properties, "question", idx)?,
        options,
        answer: require_string(properties, "answer", idx)?,
        completed: false,
    })
}

fn require_string(properties: &geojson::JsonObject, key: &str, idx: usize) -> Result<String> {
    properties
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| QuestError::CatalogInvalid {
            reason: format!("feature {}: missing or non-string '{}'", idx, key),
        })
}

/// The built-in quest set: ten Melbourne landmarks.
pub fn builtin_quests() -> Vec<Quest> {
    fn quest(
        id: u32,
        name: &str,
        latitude: f64,
        longitude: f64,
        question: &str,
        options: &[&str],
        answer: &str,
    ) -> Quest {
        Quest {
            id: QuestId(id),
            name: name.to_string(),
            latitude,
            longitude,
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
            completed: false,
        }
    }

    vec![
        quest(
            1,
            "Fitzroy Gardens",
            -37.8136,
            144.9800,
            "When were the Fitzroy Gardens established?",
            &["1. 1839", "2. 1859", "3. 1879", "4. 1899"],
            "2. 1859",
        ),
        quest(
            2,
            "Royal Botanic Gardens",
            -37.8304,
            144.9803,
            "What is the total area of the Royal Botanic Gardens?",
            &["1. 38 hectares", "2. 42 hectares", "3. 45 hectares", "4. 40 hectares"],
            "1. 38 hectares",
        ),
        quest(
            3,
            "Melbourne Cricket Ground (MCG)",
            -37.8200,
            144.9834,
            "How many people can the MCG seat for an AFL match?",
            &["1. 70,000", "2. 90,000", "3. 100,000", "4. 95,000"],
            "3. 100,000",
        ),
        quest(
            4,
            "Eureka Skydeck",
            -37.8213,
            144.9647,
            "What is the height of the Eureka Skydeck?",
            &["1. 285 meters", "2. 300 meters", "3. 270 meters", "4. 297 meters"],
            "4. 297 meters",
        ),
        quest(
            5,
            "Queen Victoria Market",
            -37.8074,
            144.9569,
            "What type of market is the Queen Victoria Market primarily known for?",
            &[
                "1. Food market",
                "2. Artisan crafts market",
                "3. Clothing market",
                "4. Automobile market",
            ],
            "1. Food market",
        ),
        quest(
            6,
            "Marvel Stadium",
            -37.8165,
            144.9470,
            "In what year did Marvel Stadium (formerly Docklands Stadium) officially open?",
            &["1. 1999", "2. 2000", "3. 2001", "4. 2002"],
            "2. 2000",
        ),
        quest(
            7,
            "Melbourne Central",
            -37.8104,
            144.9631,
            "What famous landmark is housed inside Melbourne Central?",
            &[
                "1. The Shot Tower",
                "2. The Eureka Tower",
                "3. The Royal Exhibition Building",
                "4. The Shrine of Remembrance",
            ],
            "1. The Shot Tower",
        ),
        quest(
            8,
            "Shrine of Remembrance",
            -37.8304,
            144.9735,
            "The Shrine of Remembrance is dedicated to soldiers of which war?",
            &["1. World War I", "2. World War II", "3. Vietnam War", "4. Korean War"],
            "1. World War I",
        ),
        quest(
            9,
            "National Gallery of Victoria (NGV)",
            -37.8226,
            144.9689,
            "When was the National Gallery of Victoria (NGV) founded?",
            &["1. 1856", "2. 1900", "3. 1950", "4. 1800"],
            "1. 1856",
        ),
        quest(
            10,
            "Melbourne Museum",
            -37.8032,
            144.9717,
            "Which exhibit is one of the most famous in Melbourne Museum?",
            &[
                "1. Dinosaur Skeletons",
                "2. Phar Lap",
                "3. Egyptian Mummies",
                "4. Space Shuttle Replica",
            ],
            "2. Phar Lap",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_passes_validation() {
        let quests = builtin_quests();
        assert_eq!(quests.len(), 10);
        assert!(validate_catalog(&quests).is_ok());
    }

    #[test]
    fn builtin_ids_are_sequential() {
        let quests = builtin_quests();
        for (idx, quest) in quests.iter().enumerate() {
            assert_eq!(quest.id, QuestId(idx as u32 + 1));
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut quests = builtin_quests();
        quests[1].id = quests[0].id;
        assert!(matches!(
            validate_catalog(&quests),
            Err(QuestError::DuplicateQuestId { id: QuestId(1) })
        ));
    }
}
