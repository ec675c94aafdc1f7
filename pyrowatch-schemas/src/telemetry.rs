use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TemperatureSample {
    pub time: String,
    pub temperature: f64,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProductionSample {
    pub time: String,
    pub syngas: f64,
    pub oil: f64,
    pub solid_char: f64,
}
