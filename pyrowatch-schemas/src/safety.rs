use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Alert {
    pub id: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: String,
    pub system: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SystemStatus {
    pub temperature_safety: bool,
    pub pressure_safety: bool,
    pub electrical_safety: bool,
    pub gas_leak_detection: bool,
    pub emergency_stop: bool,
}

impl Default for SystemStatus {
    fn default() -> Self {
        Self {
            temperature_safety: true,
            pressure_safety: true,
            electrical_safety: true,
            gas_leak_detection: true,
            emergency_stop: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SafetyState {
    pub system_status: SystemStatus,
    pub alerts: Vec<Alert>,
}
