use crate::{
    error::PyrowatchError,
    logger::TimeSeriesLogger,
    simulation::{
        engine::DashboardEngine,
        state::DashboardState,
        telemetry::{SampleWindow, HISTORY_CAPACITY},
    },
};
use pyrowatch_schemas::{
    pathway::PathwayState,
    process::ProcessState,
    safety::{Alert, AlertSeverity, SafetyState, SystemStatus},
    telemetry::{ProductionSample, TemperatureSample},
};
use rand::{rngs::StdRng, SeedableRng};

/// A fluent builder for constructing a `DashboardEngine`.
///
/// Every component has a default matching the stock demo plant, so
/// `SimulationBuilder::new().build()` yields the dashboard exactly as an
/// operator first sees it. Scenario files override pieces selectively.
#[derive(Default)]
pub struct SimulationBuilder {
    seed: u64,
    process: Option<ProcessState>,
    pathways: Option<PathwayState>,
    alerts: Option<Vec<Alert>>,
    temperature_history: Option<Vec<TemperatureSample>>,
    production_history: Option<Vec<ProductionSample>>,
    log_path: Option<String>,
}

impl SimulationBuilder {
    /// Creates a new `SimulationBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the RNG seed so a session can be replayed exactly.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the initial `ProcessState` in place of the stock reactor conditions.
    pub fn with_process(mut self, process: ProcessState) -> Self {
        self.process = Some(process);
        self
    }

    /// Sets the initial `PathwayState`. The subsystem `is_active` flags are
    /// re-derived from the selected pathway during `build`.
    pub fn with_pathways(mut self, pathways: PathwayState) -> Self {
        self.pathways = Some(pathways);
        self
    }

    /// Replaces the stock active alerts with the given list.
    pub fn with_alerts(mut self, alerts: Vec<Alert>) -> Self {
        self.alerts = Some(alerts);
        self
    }

    /// Pre-fills the temperature window. Only the most recent entries up to
    /// the window capacity are kept.
    pub fn with_temperature_history(mut self, samples: Vec<TemperatureSample>) -> Self {
        self.temperature_history = Some(samples);
        self
    }

    /// Pre-fills the production window. Only the most recent entries up to
    /// the window capacity are kept.
    pub fn with_production_history(mut self, samples: Vec<ProductionSample>) -> Self {
        self.production_history = Some(samples);
        self
    }

    /// Configures the simulation to write time-series data to the specified CSV file.
    pub fn with_timeseries_logging_to_file(mut self, path: &str) -> Self {
        self.log_path = Some(path.to_string());
        self
    }

    /// Consumes the builder and returns a fully configured `DashboardEngine`.
    ///
    /// # Errors
    ///
    /// Returns a `PyrowatchError` if the time-series log file cannot be created.
    pub fn build(self) -> Result<DashboardEngine, PyrowatchError> {
        let mut pathways = self.pathways.unwrap_or_default();
        let active = pathways.active_pathway;
        pathways.select(active);

        let safety = SafetyState {
            system_status: SystemStatus::default(),
            alerts: self.alerts.unwrap_or_else(default_alerts),
        };

        let mut temperature_history = SampleWindow::new(HISTORY_CAPACITY);
        for sample in self
            .temperature_history
            .unwrap_or_else(default_temperature_history)
        {
            temperature_history.push(sample);
        }

        let mut production_history = SampleWindow::new(HISTORY_CAPACITY);
        for sample in self
            .production_history
            .unwrap_or_else(default_production_history)
        {
            production_history.push(sample);
        }

        let state = DashboardState {
            tick: 0,
            process: self.process.unwrap_or_default(),
            pathways,
            safety,
            temperature_history,
            production_history,
            events: Vec::new(),
        };

        let logger = match self.log_path {
            Some(path) => Some(
                TimeSeriesLogger::new(&path)
                    .map_err(|e| PyrowatchError::FileIO(path.clone(), e))?,
            ),
            None => None,
        };

        Ok(DashboardEngine {
            state,
            rng: StdRng::seed_from_u64(self.seed),
            logger,
        })
    }
}

fn default_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            severity: AlertSeverity::Warning,
            message: "Membrane separation efficiency below optimal (89%)".to_string(),
            timestamp: "14:23:15".to_string(),
            system: "Hydrogen Separation".to_string(),
        },
        Alert {
            id: "2".to_string(),
            severity: AlertSeverity::Info,
            message: "Scheduled maintenance due in 48 hours".to_string(),
            timestamp: "12:45:30".to_string(),
            system: "System Maintenance".to_string(),
        },
    ]
}

fn default_temperature_history() -> Vec<TemperatureSample> {
    [
        ("14:00", 450.0),
        ("14:05", 465.0),
        ("14:10", 475.0),
        ("14:15", 485.0),
        ("14:20", 488.0),
        ("14:25", 485.0),
    ]
    .into_iter()
    .map(|(time, temperature)| TemperatureSample {
        time: time.to_string(),
        temperature,
        target: 500.0,
    })
    .collect()
}

fn default_production_history() -> Vec<ProductionSample> {
    [
        ("14:00", 15.0, 8.0, 5.0),
        ("14:05", 18.0, 10.0, 6.0),
        ("14:10", 22.0, 12.0, 7.0),
        ("14:15", 25.0, 12.0, 8.0),
        ("14:20", 28.0, 12.0, 8.0),
        ("14:25", 30.0, 12.0, 8.0),
    ]
    .into_iter()
    .map(|(time, syngas, oil, solid_char)| ProductionSample {
        time: time.to_string(),
        syngas,
        oil,
        solid_char,
    })
    .collect()
}
