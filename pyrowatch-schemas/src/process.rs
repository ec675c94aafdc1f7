use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    Running,
    Idle,
    Shutdown,
    Maintenance,
}

impl ProcessStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProcessStatus::Running => "RUNNING",
            ProcessStatus::Idle => "IDLE",
            ProcessStatus::Shutdown => "SHUTDOWN",
            ProcessStatus::Maintenance => "MAINTENANCE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessState {
    pub temperature: f64,
    pub target_temperature: f64,
    pub pressure: f64,
    pub flow_rate: f64,
    pub power_consumption: f64,
    pub heating_power: f64,
    pub is_heating_active: bool,
    pub status: ProcessStatus,
    pub efficiency: f64,
}

impl Default for ProcessState {
    fn default() -> Self {
        Self {
            temperature: 485.0,
            target_temperature: 500.0,
            pressure: 95.0,
            flow_rate: 28.0,
            power_consumption: 75.0,
            heating_power: 85.0,
            is_heating_active: true,
            status: ProcessStatus::Running,
            efficiency: 82.0,
        }
    }
}
