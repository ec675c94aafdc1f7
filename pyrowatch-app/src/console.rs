//! Text rendering of the dashboard panels. Every function here is a pure
//! view over `&DashboardState`; nothing in this module mutates anything.

use pyrowatch_core::{analysis, simulation::state::DashboardState};
use pyrowatch_schemas::safety::Alert;

const PANEL_WIDTH: usize = 58;
const GAUGE_WIDTH: usize = 20;

/// Renders the full dashboard: process overview, temperature control,
/// pathway cards, safety panel, and the monitoring summary.
pub fn render_dashboard(state: &DashboardState) -> String {
    let mut out = String::new();
    out.push_str(&process_overview(state));
    out.push_str(&temperature_panel(state));
    out.push_str(&pathway_panel(state));
    out.push_str(&safety_panel(state));
    out.push_str(&monitoring_panel(state));
    out
}

fn rule() -> String {
    format!("{}\n", "=".repeat(PANEL_WIDTH))
}

fn header(title: &str) -> String {
    format!("\n--- {} ---\n", title)
}

/// A fixed-width bar gauge in the instrument-panel style: the fill shows
/// where the value sits inside the sensor's plausible band.
fn gauge(value: f64, min: f64, max: f64) -> String {
    let fraction = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let filled = (fraction * GAUGE_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(GAUGE_WIDTH - filled))
}

fn on_off(active: bool) -> &'static str {
    if active {
        "ON"
    } else {
        "OFF"
    }
}

fn process_overview(state: &DashboardState) -> String {
    let process = &state.process;
    let mut out = rule();
    out.push_str(&format!(
        "PYROWATCH   tick {:>4}   status: {}\n",
        state.tick,
        process.status.label()
    ));
    out.push_str(&rule());
    out.push_str(&format!(
        "Temperature {:>6.0} degC  {}\n",
        process.temperature,
        gauge(process.temperature, 200.0, 700.0)
    ));
    out.push_str(&format!(
        "Pressure    {:>6.1} kPa   {}  {}\n",
        process.pressure,
        gauge(process.pressure, 85.0, 105.0),
        analysis::pressure_band(process.pressure).label()
    ));
    out.push_str(&format!(
        "Flow rate   {:>6.1} L/min {}\n",
        process.flow_rate,
        gauge(process.flow_rate, 20.0, 35.0)
    ));
    out.push_str(&format!(
        "Power       {:>6.1} kW    {}\n",
        process.power_consumption,
        gauge(process.power_consumption, 0.0, 100.0)
    ));
    out.push_str(&format!(
        "Efficiency  {:>6.1} %     {}\n",
        process.efficiency,
        analysis::efficiency_grade(process.efficiency).label()
    ));
    out
}

fn temperature_panel(state: &DashboardState) -> String {
    let process = &state.process;
    let mut out = header("Temperature Control");
    out.push_str(&format!(
        "Current: {:.0} degC   Target: {:.0} degC   Trend: {}\n",
        process.temperature,
        process.target_temperature,
        match analysis::temperature_trend(process.temperature, process.target_temperature) {
            analysis::Trend::Rising => "rising",
            analysis::Trend::Falling => "falling",
            analysis::Trend::Steady => "steady",
        }
    ));
    out.push_str(&format!(
        "Heating: {}   Heating power: {:.0}%\n",
        on_off(process.is_heating_active),
        process.heating_power
    ));
    if analysis::is_overheating(process.temperature) {
        out.push_str("[ALERT] Reactor overheating: temperature above 650 degC\n");
    }
    if analysis::is_underpowered(process.temperature, process.target_temperature) {
        out.push_str("[WARN] Reactor underpowered: more than 50 degC below target\n");
    }
    out
}

fn pathway_panel(state: &DashboardState) -> String {
    let pathways = &state.pathways;
    let mut out = header("Output Pathways");
    out.push_str(&format!(
        "Active pathway: {}\n",
        pathways.active_pathway.label()
    ));

    let condensation = &pathways.condensation;
    out.push_str(&format!(
        "  Condensation [{}]  cooling {:.0} degC | oil {:.1} L/hr | gas recycle {:.0}%\n",
        on_off(condensation.is_active),
        condensation.cooling_temp,
        condensation.oil_output,
        condensation.gas_recycle
    ));

    let hydrogen = &pathways.hydrogen;
    out.push_str(&format!(
        "  Hydrogen     [{}]  purity {:.1}% ({}) | output {:.1} m3/hr | separation {:.0}%\n",
        on_off(hydrogen.is_active),
        hydrogen.purity,
        analysis::purity_grade(hydrogen.purity).label(),
        hydrogen.output,
        hydrogen.separation_efficiency
    ));
    out
}

fn alert_line(alert: &Alert) -> String {
    format!(
        "  [{}] {} - {} ({})\n",
        alert.id, alert.system, alert.message, alert.timestamp
    )
}

fn check(ok: bool) -> &'static str {
    if ok {
        "[OK]"
    } else {
        "[FAULT]"
    }
}

fn safety_panel(state: &DashboardState) -> String {
    let safety = &state.safety;
    let status = &safety.system_status;
    let mut out = header("Safety Monitoring");

    if status.emergency_stop {
        out.push_str("*** EMERGENCY STOP ENGAGED ***\n");
    }

    out.push_str(&format!(
        "Temperature {}  Pressure {}  Electrical {}  Gas leak {}\n",
        check(status.temperature_safety),
        check(status.pressure_safety),
        check(status.electrical_safety),
        check(status.gas_leak_detection)
    ));
    out.push_str(&format!(
        "Emergency stop: {}\n",
        if status.emergency_stop {
            "ENGAGED"
        } else {
            "armed"
        }
    ));

    let breakdown = analysis::alerts_by_severity(&safety.alerts);
    out.push_str(&format!("Critical alerts ({}):\n", breakdown.critical.len()));
    for alert in &breakdown.critical {
        out.push_str(&alert_line(alert));
    }
    out.push_str(&format!("Warnings ({}):\n", breakdown.warnings.len()));
    for alert in &breakdown.warnings {
        out.push_str(&alert_line(alert));
    }
    if breakdown.info_count > 0 {
        out.push_str(&format!(
            "{} informational notice(s) on file\n",
            breakdown.info_count
        ));
    }
    out
}

fn monitoring_panel(state: &DashboardState) -> String {
    let mut out = header("Process Monitoring");

    out.push_str("Time   Temp  Target  Deviation\n");
    for sample in analysis::valid_temperature_samples(state.temperature_history.iter()) {
        out.push_str(&format!(
            "{}  {:>5.0}  {:>6.0}  {:>+9.0}\n",
            sample.time,
            sample.temperature,
            sample.target,
            sample.temperature - sample.target
        ));
    }
    if let Some(stability) = analysis::temperature_stability(state.temperature_history.iter()) {
        out.push_str(&format!("Temperature stability: {:.1}%\n", stability));
    }

    let totals = analysis::production_totals(state.production_history.iter());
    out.push_str(&format!(
        "Windowed output: syngas {:.0} L | oil {:.1} L | char {:.0} kg\n",
        totals.syngas, totals.oil, totals.solid_char
    ));
    out
}
