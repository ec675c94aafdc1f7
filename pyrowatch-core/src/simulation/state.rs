use crate::simulation::telemetry::SampleWindow;
use pyrowatch_schemas::{
    pathway::{Pathway, PathwayState},
    process::ProcessState,
    safety::SafetyState,
    telemetry::{ProductionSample, TemperatureSample},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimulationEvent {
    TargetTemperatureSet { celsius: f64 },
    HeatingToggled { active: bool },
    HeatingPowerSet { percent: f64 },
    PathwaySelected { pathway: Pathway },
    AlertAcknowledged { id: String },
    EmergencyStopEngaged,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub tick: u64,
    pub process: ProcessState,
    pub pathways: PathwayState,
    pub safety: SafetyState,
    pub temperature_history: SampleWindow<TemperatureSample>,
    pub production_history: SampleWindow<ProductionSample>,
    pub events: Vec<SimulationEvent>,
}
