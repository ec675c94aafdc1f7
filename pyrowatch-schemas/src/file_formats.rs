use crate::scenario::Scenario;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub schema_version: String,
    pub scenario: Scenario,
}
