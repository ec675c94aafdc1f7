use crate::{console, plotting};
use anyhow::{Context, Result};
use chrono::Duration;
use pyrowatch_core::{
    analysis,
    simulation::{
        builder::SimulationBuilder, engine::DashboardEngine, state::DashboardState,
        telemetry::TICK_INTERVAL_SECS,
    },
};
use pyrowatch_schemas::scenario::Scenario;
use std::{path::Path, thread, time};

/// Command-line overrides applied on top of the scenario.
pub struct SessionOptions {
    pub ticks: Option<u64>,
    pub seed: Option<u64>,
    pub watch: bool,
    pub realtime: bool,
}

/// Runs one operator session: builds the engine from the scenario, drives
/// the tick loop with scheduled commands, and finishes with the dashboard,
/// the session summary, and the charts.
pub fn run_session(scenario: &Scenario, options: &SessionOptions, output_dir: &str) -> Result<()> {
    let ticks = options.ticks.unwrap_or(scenario.ticks);
    let seed = options.seed.unwrap_or(scenario.seed);

    println!(
        "\n--- [Session] {} ({}) ---",
        scenario.scenario_name, scenario.scenario_id
    );
    if !scenario.notes.is_empty() {
        println!("{}", scenario.notes);
    }
    println!(
        "Running {} ticks at a {}-second interval (seed {})",
        ticks, TICK_INTERVAL_SECS, seed
    );

    let log_path = Path::new(output_dir)
        .join("session.csv")
        .to_string_lossy()
        .into_owned();
    let mut engine = build_engine(scenario, seed, &log_path)?;

    // The clock is simulated: it starts at launch time and advances one
    // sampling interval per tick. --realtime additionally sleeps it out.
    let mut now = chrono::Local::now().naive_local();
    let interval = Duration::seconds(TICK_INTERVAL_SECS);

    engine.log_initial(now)?;

    for tick in 1..=ticks {
        for action in scenario.actions.iter().filter(|a| a.at_tick == tick) {
            engine.dispatch(action.command.clone())?;
        }

        now += interval;
        engine.tick(now)?;

        if options.watch {
            println!("{}", console::render_dashboard(engine.get_state()));
        }
        if options.realtime {
            thread::sleep(time::Duration::from_secs(TICK_INTERVAL_SECS as u64));
        }
    }

    if !options.watch {
        println!("{}", console::render_dashboard(engine.get_state()));
    }

    print_session_summary(&log_path, engine.get_state())?;
    plotting::generate_all_plots(output_dir, &log_path)?;

    Ok(())
}

fn build_engine(scenario: &Scenario, seed: u64, log_path: &str) -> Result<DashboardEngine> {
    let mut builder = SimulationBuilder::new()
        .with_seed(seed)
        .with_timeseries_logging_to_file(log_path);

    if let Some(initial) = &scenario.initial {
        if let Some(process) = &initial.process {
            builder = builder.with_process(process.clone());
        }
        if let Some(pathways) = &initial.pathways {
            builder = builder.with_pathways(pathways.clone());
        }
        if let Some(alerts) = &initial.alerts {
            builder = builder.with_alerts(alerts.clone());
        }
    }

    builder
        .build()
        .with_context(|| format!("Failed to start session logging to '{}'", log_path))
}

fn print_session_summary(log_path: &str, state: &DashboardState) -> Result<()> {
    let stats = analysis::session_stats(log_path)
        .with_context(|| format!("Failed to summarize session log '{}'", log_path))?;
    let totals = analysis::production_totals(state.production_history.iter());

    println!("\n\n--- [Session Summary] ---");
    println!("========================================");
    println!("Ticks completed:        {}", stats.ticks);
    println!(
        "Temperature min/avg/max: {:.0} / {:.1} / {:.0} degC",
        stats.temperature_min, stats.temperature_avg, stats.temperature_max
    );
    println!("Operator events:        {}", stats.operator_events);
    println!("Emergency stops:        {}", stats.emergency_stops);
    if let Some(stability) =
        analysis::temperature_stability(state.temperature_history.iter())
    {
        println!("Temperature stability:  {:.1}%", stability);
    }
    println!(
        "Windowed production:    syngas {:.0} L | oil {:.1} L | char {:.0} kg",
        totals.syngas, totals.oil, totals.solid_char
    );
    println!("Active alerts:          {}", state.safety.alerts.len());
    println!("========================================");
    Ok(())
}
