use super::{
    state::{DashboardState, SimulationEvent},
    telemetry::{
        round1, SampleWindow, CHAR_WALK, FLOW_WALK, PRESSURE_WALK, SYNGAS_WALK, TEMPERATURE_WALK,
    },
};
use crate::{analysis, error::PyrowatchError, logger::TimeSeriesLogger};
use chrono::NaiveDateTime;
use pyrowatch_schemas::{
    command::Command,
    pathway::{Pathway, PathwayState},
    process::{ProcessState, ProcessStatus},
    safety::SafetyState,
    telemetry::{ProductionSample, TemperatureSample},
};
use rand::rngs::StdRng;

pub struct DashboardEngine {
    pub(super) state: DashboardState,
    pub(super) rng: StdRng,
    pub(super) logger: Option<TimeSeriesLogger>,
}

impl DashboardEngine {
    /// Writes the pre-tick state as the first log row so every session log
    /// starts from the conditions the operator actually saw.
    pub fn log_initial(&mut self, now: NaiveDateTime) -> Result<(), PyrowatchError> {
        if let Some(logger) = &mut self.logger {
            logger.log_state(&self.state, &now.format("%H:%M:%S").to_string())?;
        }
        Ok(())
    }

    /// Advances the simulated plant by one sampling interval. Telemetry is a
    /// bounded random walk around the previous reading, history windows slide
    /// forward, and the row is logged together with any operator events
    /// dispatched since the last tick.
    pub fn tick(&mut self, now: NaiveDateTime) -> Result<(), PyrowatchError> {
        self.state.tick += 1;

        self.state.process.temperature = TEMPERATURE_WALK
            .step(&mut self.rng, self.state.process.temperature)
            .round();
        self.state.process.pressure =
            round1(PRESSURE_WALK.step(&mut self.rng, self.state.process.pressure));
        self.state.process.flow_rate =
            round1(FLOW_WALK.step(&mut self.rng, self.state.process.flow_rate));

        self.state.temperature_history.push(TemperatureSample {
            time: now.format("%H:%M").to_string(),
            temperature: self.state.process.temperature,
            target: self.state.process.target_temperature,
        });

        let prev_syngas = self
            .state
            .production_history
            .latest()
            .map_or(25.0, |s| s.syngas);
        let prev_char = self
            .state
            .production_history
            .latest()
            .map_or(8.0, |s| s.solid_char);
        self.state.production_history.push(ProductionSample {
            time: now.format("%H:%M").to_string(),
            syngas: SYNGAS_WALK.step(&mut self.rng, prev_syngas).round(),
            oil: round1(self.state.pathways.condensation.oil_output),
            solid_char: CHAR_WALK.step(&mut self.rng, prev_char).round(),
        });

        if let Some(logger) = &mut self.logger {
            logger.log_state(&self.state, &now.format("%H:%M:%S").to_string())?;
        }

        self.state.events.clear();
        Ok(())
    }

    /// Applies one operator command to the state. Effective commands record a
    /// `SimulationEvent`; commands that change nothing (out-of-range target,
    /// unknown alert id, toggling a pathway that is already in that position)
    /// leave the state and the event list untouched.
    pub fn dispatch(&mut self, command: Command) -> Result<(), PyrowatchError> {
        match command {
            Command::SetTargetTemperature { celsius } => {
                if analysis::target_temperature_in_range(celsius) {
                    self.state.process.target_temperature = celsius;
                    self.state
                        .events
                        .push(SimulationEvent::TargetTemperatureSet { celsius });
                }
            }
            Command::SetHeating { active } => {
                self.state.process.is_heating_active = active;
                self.state.process.status = if active {
                    ProcessStatus::Running
                } else {
                    ProcessStatus::Idle
                };
                self.state
                    .events
                    .push(SimulationEvent::HeatingToggled { active });
            }
            Command::SetHeatingPower { percent } => {
                let percent = percent.clamp(0.0, 100.0);
                self.state.process.heating_power = percent;
                self.state
                    .events
                    .push(SimulationEvent::HeatingPowerSet { percent });
            }
            Command::SelectPathway { pathway } => {
                self.select_pathway(pathway);
            }
            Command::ToggleCondensation { on } => {
                let next = self.state.pathways.active_pathway.with_condensation(on);
                self.select_pathway(next);
            }
            Command::ToggleHydrogen { on } => {
                let next = self.state.pathways.active_pathway.with_hydrogen(on);
                self.select_pathway(next);
            }
            Command::AcknowledgeAlert { id } => {
                let before = self.state.safety.alerts.len();
                self.state.safety.alerts.retain(|alert| alert.id != id);
                if self.state.safety.alerts.len() < before {
                    self.state
                        .events
                        .push(SimulationEvent::AlertAcknowledged { id });
                }
            }
            Command::EmergencyStop => {
                self.state.process.status = ProcessStatus::Shutdown;
                self.state.process.is_heating_active = false;
                self.state.safety.system_status.emergency_stop = true;
                self.state.events.push(SimulationEvent::EmergencyStopEngaged);
            }
        }
        Ok(())
    }

    fn select_pathway(&mut self, pathway: Pathway) {
        if self.state.pathways.active_pathway == pathway {
            return;
        }
        self.state.pathways.select(pathway);
        self.state
            .events
            .push(SimulationEvent::PathwaySelected { pathway });
    }

    pub fn get_tick(&self) -> u64 {
        self.state.tick
    }

    pub fn get_state(&self) -> &DashboardState {
        &self.state
    }

    pub fn get_process(&self) -> &ProcessState {
        &self.state.process
    }

    pub fn get_pathways(&self) -> &PathwayState {
        &self.state.pathways
    }

    pub fn get_safety(&self) -> &SafetyState {
        &self.state.safety
    }

    pub fn get_temperature_history(&self) -> &SampleWindow<TemperatureSample> {
        &self.state.temperature_history
    }

    pub fn get_production_history(&self) -> &SampleWindow<ProductionSample> {
        &self.state.production_history
    }
}
