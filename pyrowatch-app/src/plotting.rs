//! This module is responsible for generating all visualizations from session log data.

use anyhow::Result;
use plotters::prelude::*;
use pyrowatch_core::analysis::LogEntry;
use pyrowatch_core::simulation::state::SimulationEvent;

/// A flattened structure holding the parsed fields of one log row for easy plotting.
#[derive(Clone, Debug)]
struct PlottingData {
    tick: u64,
    temperature: f64,
    target: f64,
    pressure: f64,
    flow: f64,
    syngas: f64,
    oil: f64,
    solid_char: f64,
    events: Vec<SimulationEvent>,
}

impl PlottingData {
    fn is_finite(&self) -> bool {
        [
            self.temperature,
            self.target,
            self.pressure,
            self.flow,
            self.syngas,
            self.oil,
            self.solid_char,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// The main function to generate and save all charts for a session.
pub fn generate_all_plots(output_dir: &str, log_path: &str) -> Result<()> {
    println!("[Plotting] Generating graphs from session data...");

    let data = parse_log_file(log_path)?;

    if data.is_empty() {
        println!("[Plotting] Warning: No data to plot.");
        return Ok(());
    }

    plot_temperature(output_dir, &data)?;
    plot_production(output_dir, &data)?;
    plot_process_conditions(output_dir, &data)?;
    plot_event_timeline(output_dir, &data)?;

    println!("[Plotting] Session graphs have been saved to '{}'.", output_dir);
    Ok(())
}

/// Parses the session log CSV file into a vector of `PlottingData` structs.
/// Rows with non-finite readings are dropped rather than plotted.
fn parse_log_file(log_path: &str) -> Result<Vec<PlottingData>> {
    let mut reader = csv::Reader::from_path(log_path)?;
    let mut data = Vec::new();

    for result in reader.deserialize() {
        let record: LogEntry = result?;
        let events: Vec<SimulationEvent> = serde_json::from_str(&record.events_json)?;

        let row = PlottingData {
            tick: record.tick,
            temperature: record.temperature_c,
            target: record.target_c,
            pressure: record.pressure_kpa,
            flow: record.flow_lpm,
            syngas: record.syngas_lpm,
            oil: record.oil_lpm,
            solid_char: record.char_kgpm,
            events,
        };
        if row.is_finite() {
            data.push(row);
        }
    }

    Ok(data)
}

/// Reactor temperature against the operator setpoint.
fn plot_temperature(output_dir: &str, data: &[PlottingData]) -> Result<()> {
    let path = format!("{}/1_temperature.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = data.last().map_or(1, |d| d.tick);
    let min_temp = data
        .iter()
        .flat_map(|d| [d.temperature, d.target])
        .fold(f64::INFINITY, f64::min);
    let max_temp = data
        .iter()
        .flat_map(|d| [d.temperature, d.target])
        .fold(f64::NEG_INFINITY, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Reactor Temperature Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, (min_temp - 20.0)..(max_temp + 20.0))?;

    chart
        .configure_mesh()
        .x_desc("Tick")
        .y_desc("Temperature (degC)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            data.iter().map(|d| (d.tick, d.temperature)),
            RED.stroke_width(3),
        ))?
        .label("Reactor temperature")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    chart
        .draw_series(DashedLineSeries::new(
            data.iter().map(|d| (d.tick, d.target)),
            5,
            5,
            (&BLUE).into(),
        ))?
        .label("Target")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Line chart of the three process outputs.
fn plot_production(output_dir: &str, data: &[PlottingData]) -> Result<()> {
    let path = format!("{}/2_production.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = data.last().map_or(1, |d| d.tick);
    let max_output = data
        .iter()
        .flat_map(|d| [d.syngas, d.oil, d.solid_char])
        .fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Production Outputs Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0f64..max_output * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Tick")
        .y_desc("Output rate")
        .draw()?;

    let series: [(&str, &RGBColor, fn(&PlottingData) -> f64); 3] = [
        ("Syngas (L/min)", &BLUE, |d| d.syngas),
        ("Pyrolysis oil (L/hr)", &GREEN, |d| d.oil),
        ("Char (kg/hr)", &MAGENTA, |d| d.solid_char),
    ];

    for (label, color, value) in series {
        chart
            .draw_series(LineSeries::new(
                data.iter().map(|d| (d.tick, value(d))),
                color.stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Pressure and flow on one chart; both bands fit comfortably under 120.
fn plot_process_conditions(output_dir: &str, data: &[PlottingData]) -> Result<()> {
    let path = format!("{}/3_process_conditions.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = data.last().map_or(1, |d| d.tick);

    let mut chart = ChartBuilder::on(&root)
        .caption("Process Conditions Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0f64..120f64)?;

    chart
        .configure_mesh()
        .x_desc("Tick")
        .y_desc("Value")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            data.iter().map(|d| (d.tick, d.pressure)),
            RED.stroke_width(3),
        ))?
        .label("Pressure (kPa)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    chart
        .draw_series(LineSeries::new(
            data.iter().map(|d| (d.tick, d.flow)),
            BLUE.stroke_width(3),
        ))?
        .label("Feed flow (L/min)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Histogram of operator activity: one bar per tick that carried events,
/// with emergency stops drawn over the rest in red.
fn plot_event_timeline(output_dir: &str, data: &[PlottingData]) -> Result<()> {
    let path = format!("{}/4_event_timeline.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 256)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = data.last().map_or(1, |d| d.tick);
    let max_events = data.iter().map(|d| d.events.len()).max().unwrap_or(1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Operator Events", ("sans-serif", 30).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(20)
        .build_cartesian_2d(0u64..max_tick + 1, 0..(max_events as i32 + 1))?;

    chart.configure_mesh().x_desc("Tick").disable_y_axis().draw()?;

    chart.draw_series(
        Histogram::vertical(&chart).style(BLUE.filled()).data(
            data.iter()
                .filter(|d| !d.events.is_empty())
                .map(|d| (d.tick, d.events.len() as i32)),
        ),
    )?;

    let stop_ticks: Vec<u64> = data
        .iter()
        .filter(|d| {
            d.events
                .iter()
                .any(|e| matches!(e, SimulationEvent::EmergencyStopEngaged))
        })
        .map(|d| d.tick)
        .collect();
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RED.filled())
            .data(stop_ticks.iter().map(|tick| (*tick, 1))),
    )?;

    root.present()?;
    Ok(())
}
