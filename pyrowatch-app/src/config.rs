use anyhow::{bail, Context, Result};
use pyrowatch_schemas::{
    command::Command,
    file_formats::ScenarioFile,
    pathway::Pathway,
    scenario::{Scenario, ScheduledAction},
};
use std::fs;

pub const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

/// Loads a scenario from a YAML file.
pub fn load_scenario(path: &str) -> Result<Scenario> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file '{}'", path))?;
    let file: ScenarioFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from '{}'", path))?;

    if file.schema_version != SUPPORTED_SCHEMA_VERSION {
        bail!(
            "Scenario file '{}' has schema version '{}'; this build supports '{}'",
            path,
            file.schema_version,
            SUPPORTED_SCHEMA_VERSION
        );
    }

    Ok(file.scenario)
}

/// The built-in session used when no scenario file is given: a short shift
/// that exercises every operator control against the stock plant.
pub fn demo_scenario() -> Scenario {
    Scenario {
        scenario_id: "demo".to_string(),
        scenario_name: "Demo shift".to_string(),
        notes: "Raises the setpoint, drops to hydrogen-only output, clears the \
                membrane warning, then restores both pathways."
            .to_string(),
        seed: 42,
        ticks: 12,
        initial: None,
        actions: vec![
            ScheduledAction {
                at_tick: 2,
                command: Command::SetTargetTemperature { celsius: 550.0 },
            },
            ScheduledAction {
                at_tick: 4,
                command: Command::ToggleCondensation { on: false },
            },
            ScheduledAction {
                at_tick: 6,
                command: Command::AcknowledgeAlert {
                    id: "1".to_string(),
                },
            },
            ScheduledAction {
                at_tick: 8,
                command: Command::SetHeatingPower { percent: 90.0 },
            },
            ScheduledAction {
                at_tick: 10,
                command: Command::SelectPathway {
                    pathway: Pathway::Both,
                },
            },
        ],
    }
}
