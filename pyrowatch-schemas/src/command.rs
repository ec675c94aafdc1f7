use crate::pathway::Pathway;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    SetTargetTemperature {
        celsius: f64,
    },
    SetHeating {
        active: bool,
    },
    SetHeatingPower {
        percent: f64,
    },
    SelectPathway {
        pathway: Pathway,
    },
    ToggleCondensation {
        on: bool,
    },
    ToggleHydrogen {
        on: bool,
    },
    AcknowledgeAlert {
        id: String,
    },
    EmergencyStop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_deserialize_from_tagged_json() {
        let command: Command =
            serde_json::from_str(r#"{"type": "set_target_temperature", "celsius": 550}"#)
                .unwrap();
        assert!(matches!(
            command,
            Command::SetTargetTemperature { celsius } if celsius == 550.0
        ));

        let command: Command =
            serde_json::from_str(r#"{"type": "toggle_condensation", "on": false}"#).unwrap();
        assert!(matches!(command, Command::ToggleCondensation { on: false }));

        let command: Command = serde_json::from_str(r#"{"type": "emergency_stop"}"#).unwrap();
        assert!(matches!(command, Command::EmergencyStop));
    }

    #[test]
    fn test_select_pathway_deserializes_enum_value() {
        let command: Command =
            serde_json::from_str(r#"{"type": "select_pathway", "pathway": "both"}"#).unwrap();
        assert!(matches!(
            command,
            Command::SelectPathway {
                pathway: Pathway::Both
            }
        ));
    }
}
