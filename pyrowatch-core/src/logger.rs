use crate::simulation::state::DashboardState;
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::io;

#[derive(Debug, Serialize)]
struct LogEntry {
    tick: u64,
    time: String,
    temperature_c: f64,
    target_c: f64,
    pressure_kpa: f64,
    flow_lpm: f64,
    heating_power_pct: f64,
    status: String,
    active_pathway: String,
    syngas_lpm: f64,
    oil_lpm: f64,
    char_kgpm: f64,
    alerts_json: String,
    events_json: String,
}

pub struct TimeSeriesLogger {
    writer: Writer<fs::File>,
}

impl TimeSeriesLogger {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_state(&mut self, state: &DashboardState, time: &str) -> Result<(), anyhow::Error> {
        let alerts_json = serde_json::to_string(&state.safety.alerts)?;
        let events_json = serde_json::to_string(&state.events)?;
        let production = state.production_history.latest();

        let entry = LogEntry {
            tick: state.tick,
            time: time.to_string(),
            temperature_c: state.process.temperature,
            target_c: state.process.target_temperature,
            pressure_kpa: state.process.pressure,
            flow_lpm: state.process.flow_rate,
            heating_power_pct: state.process.heating_power,
            status: state.process.status.label().to_string(),
            active_pathway: state.pathways.active_pathway.as_str().to_string(),
            syngas_lpm: production.map_or(0.0, |s| s.syngas),
            oil_lpm: production.map_or(0.0, |s| s.oil),
            char_kgpm: production.map_or(0.0, |s| s.solid_char),
            alerts_json,
            events_json,
        };

        self.writer.serialize(entry)?;
        self.writer.flush()?;
        Ok(())
    }
}
