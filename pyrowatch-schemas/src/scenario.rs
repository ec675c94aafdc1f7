use crate::{command::Command, pathway::PathwayState, process::ProcessState, safety::Alert};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduledAction {
    pub at_tick: u64,
    pub command: Command,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InitialConditions {
    pub process: Option<ProcessState>,
    pub pathways: Option<PathwayState>,
    pub alerts: Option<Vec<Alert>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Scenario {
    pub scenario_id: String,
    pub scenario_name: String,
    pub notes: String,
    pub seed: u64,
    pub ticks: u64,
    pub initial: Option<InitialConditions>,
    pub actions: Vec<ScheduledAction>,
}
