use serde::Deserialize;

/// Position update body, one fix from the position source
#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub accuracy_m: f64,
}

/// Answer option selection body
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub option: String,
}
