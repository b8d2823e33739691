use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use geoquest_core::config::LayeredConfig;
use geoquest_core::models::Quest;

use crate::output::OutputWriter;

#[derive(Tabled, Serialize)]
struct QuestRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Latitude")]
    latitude: f64,
    #[tabled(rename = "Longitude")]
    longitude: f64,
    #[tabled(rename = "Options")]
    options: usize,
}

impl From<&Quest> for QuestRow {
    fn from(quest: &Quest) -> Self {
        Self {
            id: quest.id.0,
            name: quest.name.clone(),
            latitude: quest.latitude,
            longitude: quest.longitude,
            options: quest.options.len(),
        }
    }
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let quests = super::load_quests(config)?;

    let rows: Vec<QuestRow> = quests.iter().map(QuestRow::from).collect();
    output.table(rows);

    Ok(())
}
